pub mod traits;
pub mod error;
pub mod markup;
pub mod rebalance;
pub mod props;
pub mod fit;
pub mod engine;
pub mod fixed_pitch;
pub mod rich_text;
pub mod egui_probe;
pub mod widget;

// Export traits
pub use traits::{ProbeSurface, ProbeHost, ProbeGuard};

// Export errors
pub use error::{EllipsisError, MarkupError};

// Export inputs and fit search
pub use props::EllipsisProps;
pub use fit::{
    compute_fit, fit_plain, fit_html,
    FitResult, FitOutcome, RenderBudget, DEFAULT_LINE_HEIGHT
};

// Export markup handling
pub use markup::{scan, strip_tags, validate_markup, Markup, TagKind, TagPosition, Token};
pub use rebalance::{rebuild_prefix, OpenTagStack};

// Export recompute engine
pub use engine::{Ellipsis, Phase, DisplayState, PassReport, RecomputeTicket, RECOMPUTE_DELAY};

// Export measuring backends
pub use fixed_pitch::{FixedPitchHost, FixedPitchProbe, FixedPitchStyle};
pub use egui_probe::{EguiProbeHost, EguiProbe};

// Export egui widget
pub use widget::{TextEllipsis, EllipsisResponse, AffordanceRenderer};
