use crate::error::EllipsisError;
use std::ops::{Deref, DerefMut};

/// A hidden surface that lays content out the way the live container would
/// and reports the resulting height.
///
/// The fit search drives a probe through many candidate contents per pass:
/// replace the content, optionally append the affordance, read the height.
pub trait ProbeSurface {
    /// Replaces the content with plain text.
    fn set_text(&mut self, text: &str);

    /// Replaces the content with an HTML fragment.
    fn set_html(&mut self, html: &str);

    /// Appends the "ellipsis + action" span after the current content.
    ///
    /// The span never wraps internally: if it does not fit on the current
    /// line it moves to the next one as a whole.
    fn append_affordance(&mut self, affordance: &str);

    /// Natural height of the current content in pixels.
    fn height(&mut self) -> f32;

    /// Line height from the container's typography, if it could be read.
    fn line_height(&self) -> Option<f32>;
}

/// Something that can create probes matching a live container.
pub trait ProbeHost {
    type Probe: ProbeSurface;

    /// Creates and attaches a probe styled like the container.
    ///
    /// Fails when the container cannot be measured yet; callers skip the
    /// pass instead of reporting an error.
    fn mount_probe(&mut self) -> Result<Self::Probe, EllipsisError>;

    /// Detaches a probe created by [`ProbeHost::mount_probe`].
    fn unmount_probe(&mut self, probe: &mut Self::Probe);
}

/// Scoped probe: mounted on creation, unmounted when dropped.
///
/// Every exit path of a recompute pass (early return, `?`, unwinding)
/// goes through `Drop`, so a probe never outlives the pass that made it.
pub struct ProbeGuard<'h, H: ProbeHost + ?Sized> {
    host: &'h mut H,
    probe: H::Probe,
}

impl<'h, H: ProbeHost + ?Sized> ProbeGuard<'h, H> {
    pub fn mount(host: &'h mut H) -> Result<Self, EllipsisError> {
        let probe = host.mount_probe()?;
        Ok(Self { host, probe })
    }
}

impl<H: ProbeHost + ?Sized> Deref for ProbeGuard<'_, H> {
    type Target = H::Probe;

    fn deref(&self) -> &Self::Target {
        &self.probe
    }
}

impl<H: ProbeHost + ?Sized> DerefMut for ProbeGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.probe
    }
}

impl<H: ProbeHost + ?Sized> Drop for ProbeGuard<'_, H> {
    fn drop(&mut self) {
        self.host.unmount_probe(&mut self.probe);
    }
}
