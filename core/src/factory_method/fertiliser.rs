/// The product every plant creator hands out.
pub trait Fertiliser {
    fn whoami(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoseFertiliser;

#[derive(Debug, Clone, Copy, Default)]
pub struct TulipFertiliser;

#[derive(Debug, Clone, Copy, Default)]
pub struct HybiscusFertiliser;

#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralFertiliser;

#[derive(Debug, Clone, Copy, Default)]
pub struct FirFertiliser;

#[derive(Debug, Clone, Copy, Default)]
pub struct PineFertiliser;

/// Only a [`Fir`](super::trees::Fir) knows how to ask for this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganicFertiliser;

impl Fertiliser for RoseFertiliser {
    fn whoami(&self) -> &'static str {
        "rose fertiliser"
    }
}

impl Fertiliser for TulipFertiliser {
    fn whoami(&self) -> &'static str {
        "tulip fertiliser"
    }
}

impl Fertiliser for HybiscusFertiliser {
    fn whoami(&self) -> &'static str {
        "hybiscus fertiliser"
    }
}

impl Fertiliser for GeneralFertiliser {
    fn whoami(&self) -> &'static str {
        "general fertiliser"
    }
}

impl Fertiliser for FirFertiliser {
    fn whoami(&self) -> &'static str {
        "fir fertiliser"
    }
}

impl Fertiliser for PineFertiliser {
    fn whoami(&self) -> &'static str {
        "pine fertiliser"
    }
}

impl Fertiliser for OrganicFertiliser {
    fn whoami(&self) -> &'static str {
        "organic fertiliser (for firs only)"
    }
}

/// What a tree owner asks its parameterised factory method for.
///
/// Any text converts; names that aren't recognised become `Unspecified`,
/// which every tree answers with general fertiliser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FertiliserRequest {
    Fir,
    Pine,
    Organic,
    Unspecified(String),
}

impl From<&str> for FertiliserRequest {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "fir" => FertiliserRequest::Fir,
            "pine" => FertiliserRequest::Pine,
            "organic" => FertiliserRequest::Organic,
            _ => FertiliserRequest::Unspecified(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_ignore_case() {
        assert_eq!(FertiliserRequest::from("FIR"), FertiliserRequest::Fir);
        assert_eq!(FertiliserRequest::from("Organic"), FertiliserRequest::Organic);
    }

    #[test]
    fn unknown_request_keeps_original_text() {
        assert_eq!(
            FertiliserRequest::from("any"),
            FertiliserRequest::Unspecified("any".to_string())
        );
    }
}
