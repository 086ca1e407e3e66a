//! Instructions from the state owner to the platform.

use std::time::Duration;

use arngren_commerce::checkout::MailTarget;
use arngren_commerce::Locale;

use crate::navigation::Section;
use crate::preferences::{Preference, Theme};
use crate::scheduler::TaskId;

/// A side effect for the platform to perform.
///
/// The state owner has already updated its own state when an effect is
/// returned; effects only touch the outside world.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Report `Intent::TimerFired(task)` after `delay`.
    Schedule { task: TaskId, delay: Duration },
    /// Scroll the window to the top.
    ScrollToTop,
    /// Smooth-scroll a home section into view.
    ScrollToSection(Section),
    /// Set the document's theme attribute.
    ApplyTheme(Theme),
    /// Set the document's language.
    ApplyLocale(Locale),
    /// Write a preference to durable storage.
    Persist(Preference),
    /// Open a mail composer.
    OpenMail { url: String, target: MailTarget },
}
