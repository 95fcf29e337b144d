//! Product view-model composition.
//!
//! A request handler hands [`DecoratorPipeline::compose`] a catalog product, a
//! decorator list name and request-scoped [`ComposeOptions`]; the pipeline runs
//! the list's decorators in order and returns a fully-shaped [`ViewModel`].
//! Decorator failures are logged and replaced by the decorator's default; they
//! never reach the caller.

pub mod config;
pub mod decorator;
pub mod options;
pub mod pipeline;
pub mod view_model;

pub use config::PipelineConfig;
pub use decorator::{Decorator, DecoratorContext, DecoratorListName};
pub use options::{ComposeOptions, OptionModel, ProductOption};
pub use pipeline::DecoratorPipeline;
pub use view_model::{ImageSet, PriceView, ProductIdentity, ViewModel};
