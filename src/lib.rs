//! parts-labels: printable label sheets for electronic component storage
//!
//! Each label shows the component's schematic symbol, a JEDEC-aligned outline
//! of its physical package and a block of text with the part number and key
//! electrical limits. Labels are placed on commercial sticker-sheet grids and
//! written out as PDF.
//!
//! # Architecture
//!
//! The core is a pure, synchronous pipeline over an immutable catalog:
//!
//! - **Device Resolver**: component spec to render-ready [`Label`]
//! - **Symbol / Package Renderers**: catalog entries scaled into a box
//! - **Text Block Composer**: shrink-then-truncate text fitting
//! - **Cell Compositor**: one label cell with three sub-regions
//! - **Sheet Paginator**: cells placed row-major on page grids
//! - **Render Engine**: runs a job, recovering from per-label failures
//!
//! Loading the job document and serialising pages are collaborators at the
//! edges ([`config`] and [`backend`]).
//!
//! # Modules
//!
//! - [`geometry`]: Points, rectangles, colours and drawing primitives
//! - [`library`]: Symbol and package catalog
//! - [`device`]: Component specs, device taxonomy and resolution
//! - [`render`]: Symbol, package, text and cell rendering
//! - [`layout`]: Sheet templates and pagination
//! - [`engine`]: The render orchestrator
//! - [`backend`]: Document output
//! - [`config`]: Job document loading and validation
//! - [`error`]: Error types
//!
//! # Example
//!
//! ```
//! use parts_labels::{ComponentSpec, JobConfig, RenderEngine, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let job = JobConfig::new(vec![Some(ComponentSpec::new("resistor").with_ohms(4700.0))]);
//! let report = RenderEngine::new(&catalog).render(&job).unwrap();
//! assert_eq!(report.rendered, 1);
//! assert_eq!(report.sheet.pages.len(), 1);
//! ```

pub mod backend;
pub mod config;
pub mod device;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod library;
pub mod render;

pub use backend::{DocumentInfo, PdfBackend, SheetBackend};
pub use config::JobConfig;
pub use device::{ComponentSpec, Device, DeviceResolver, Label};
pub use engine::{RenderEngine, RenderReport, RenderSummary};
pub use layout::{LayoutTemplate, Sheet, SheetPaginator};
pub use library::Catalog;
