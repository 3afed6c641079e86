use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Friendly,
    Professional,
    Urgent,
    Funny,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Friendly, Tone::Professional, Tone::Urgent, Tone::Funny];

    /// Tone name as written into the generation prompt.
    pub fn prompt_value(self) -> &'static str {
        match self {
            Tone::Friendly => "Amigável",
            Tone::Professional => "Profissional",
            Tone::Urgent => "Urgente",
            Tone::Funny => "Engraçado",
        }
    }

    /// Label shown to the operator.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Friendly => "Amigável",
            Tone::Professional => "Profissional",
            Tone::Urgent => "Urgente/Escassez",
            Tone::Funny => "Engraçado",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tone::Friendly => Tone::Professional,
            Tone::Professional => Tone::Urgent,
            Tone::Urgent => Tone::Funny,
            Tone::Funny => Tone::Friendly,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "friendly" | "amigavel" | "amigável" => Ok(Tone::Friendly),
            "professional" | "profissional" => Ok(Tone::Professional),
            "urgent" | "urgente" => Ok(Tone::Urgent),
            "funny" | "engracado" | "engraçado" => Ok(Tone::Funny),
            other => Err(format!(
                "unknown tone '{}', expected friendly, professional, urgent or funny",
                other
            )),
        }
    }
}
