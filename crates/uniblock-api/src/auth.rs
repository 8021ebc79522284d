/// The platform type of the UniFi controller.
///
/// Determines URL prefixes and login paths for the legacy API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPlatform {
    /// UniFi OS device (UDM, UDM Pro, UCG, etc.) -- `/proxy/network/` prefix.
    UnifiOs,
    /// Standalone Network Application (Java) -- no prefix.
    ClassicController,
}

impl ControllerPlatform {
    /// Map a controller-version tag to a platform.
    ///
    /// Tags mentioning UniFi OS (`UDMP-unifiOS`, `unifios`) select
    /// [`UnifiOs`](Self::UnifiOs); `auto` (or an empty tag) returns `None`
    /// so the caller can probe the controller. Anything else (`v4`, `v5`,
    /// ...) is a classic controller.
    pub fn from_version_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.is_empty() || tag == "auto" {
            None
        } else if tag.contains("unifios") {
            Some(Self::UnifiOs)
        } else {
            Some(Self::ClassicController)
        }
    }

    /// The path prefix for legacy API endpoints.
    pub fn legacy_prefix(self) -> &'static str {
        match self {
            Self::UnifiOs => "/proxy/network",
            Self::ClassicController => "",
        }
    }

    /// The login endpoint path.
    pub fn login_path(self) -> &'static str {
        match self {
            Self::UnifiOs => "/api/auth/login",
            Self::ClassicController => "/api/login",
        }
    }

    /// The logout endpoint path.
    pub fn logout_path(self) -> &'static str {
        match self {
            Self::UnifiOs => "/api/auth/logout",
            Self::ClassicController => "/api/logout",
        }
    }
}
