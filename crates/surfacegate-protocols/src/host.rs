//! Host environment protocol definitions.

use async_trait::async_trait;

use crate::error::SignalError;
use crate::surface::Surface;

/// Answers whether the extension is the registered default PDF handler
/// for a surface. Resolved outside the decision engine.
#[async_trait]
pub trait DefaultHandlerSignal: Send + Sync {
    async fn is_default_for_surface(&self, surface: Surface) -> Result<bool, SignalError>;
}

/// Facts about the running extension host.
pub trait HostEnvironment: Send + Sync {
    /// The extension runtime identity, `None` when it cannot be resolved
    /// (e.g. the extension context was invalidated).
    fn extension_id(&self) -> Option<String>;

    /// Whether a competing add-on is currently the default for `surface`.
    /// `None` when the status has not been reported.
    fn add_on_default(&self, surface: Surface) -> Option<bool>;
}

/// Surface touch points owned by the content script.
pub trait Touchpoints: Send + Sync {
    /// Remove every extension touch point from the surface.
    fn remove_all(&self, surface: Surface);

    /// Show the implicit default viewership toast.
    fn show_implicit_toast(&self, surface: Surface, message: &str);
}
