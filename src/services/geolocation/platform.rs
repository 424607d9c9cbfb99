/// Runtime platform, used only to decide whether high accuracy positioning
/// is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "android" => Platform::Android,
            "ios" => Platform::Ios,
            _ => Platform::Other,
        }
    }

    pub fn wants_high_accuracy(&self) -> bool {
        matches!(self, Platform::Android)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_os_names() {
        assert_eq!(Platform::from_os("android"), Platform::Android);
        assert_eq!(Platform::from_os("ios"), Platform::Ios);
        assert_eq!(Platform::from_os("linux"), Platform::Other);
    }

    #[test]
    fn only_android_wants_high_accuracy() {
        assert!(Platform::Android.wants_high_accuracy());
        assert!(!Platform::Ios.wants_high_accuracy());
        assert!(!Platform::Other.wants_high_accuracy());
    }
}
