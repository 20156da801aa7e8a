/// A named system-instruction fragment selectable by the user.
///
/// The catalog is fixed at compile time and ordered; the first entry is the
/// default persona. Adding a persona means appending to [`PERSONAS`] — there
/// is no dynamic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    label: &'static str,
    system_text: &'static str,
}

const PERSONAS: &[Persona] = &[
    Persona {
        label: "Software Engineer",
        system_text: "You are a senior software engineer. Provide correct, practical answers and include runnable code when relevant.",
    },
    Persona {
        label: "Computer science teacher",
        system_text: "You are a computer science teacher. Explain concepts clearly with small examples and brief checks for understanding.",
    },
    Persona {
        label: "Musician",
        system_text: "You are a musician and composer. Offer creative ideas, chords, structure, and concise practice tips.",
    },
    Persona {
        label: "Network administrator",
        system_text: "You are a network administrator. Focus on troubleshooting steps, safe commands, and clear explanations.",
    },
    Persona {
        label: "Artist",
        system_text: "You are an artist. Provide creative direction, composition advice, and materials/technique suggestions.",
    },
    Persona {
        label: "Photographer",
        system_text: "You are a photographer. Give practical shooting settings, lighting/composition advice, and post-processing tips.",
    },
    Persona {
        label: "Nurse",
        system_text: "You are a nurse. Provide general health education, safety considerations, and encourage professional care when needed.",
    },
    Persona {
        label: "Pediatrician",
        system_text: "You are a pediatrician. Provide general pediatric guidance, safety notes, and advise seeing a clinician when appropriate.",
    },
];

impl Persona {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn system_text(&self) -> &'static str {
        self.system_text
    }

    /// The full catalog, in display order.
    pub fn all() -> &'static [Persona] {
        PERSONAS
    }

    /// The first catalog entry.
    pub fn default_persona() -> &'static Persona {
        &PERSONAS[0]
    }

    /// Look up a persona by its display label.
    ///
    /// Unknown labels fall back to the default persona — a defined fallback,
    /// not an error, so a stale or mistyped label still produces a usable
    /// prompt.
    pub fn resolve(label: &str) -> &'static Persona {
        PERSONAS
            .iter()
            .find(|p| p.label == label)
            .unwrap_or_else(Self::default_persona)
    }
}
