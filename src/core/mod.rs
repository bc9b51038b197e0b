//! Host-facing presentation flow.

pub mod presenter;

pub use presenter::{PresentationStage, PresenterEvent, UnlockPresenter};
