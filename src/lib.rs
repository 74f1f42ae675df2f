//! zoo_visitors
//!
//! A small Rust library for retrieving, storing and analyzing one year of
//! daily zoo visitor counts. Pairs with the `zoo-visitors` CLI.
//!
//! ### Features
//! - Fetch the yearly payload from the visitor API (single attempt)
//! - Validate its year → months → days shape and persist it as pretty JSON
//! - Daily summary statistics (total, mean, sample std dev, extremes)
//! - Per-month statistics with month-over-month trends
//! - Cross-month comparison and seasonal grouping
//! - Console report rendering with locale-aware number formatting
//!
//! ### Example
//! ```no_run
//! use zoo_visitors::{Client, analyze};
//!
//! let payload = Client::default().fetch_raw()?;
//! zoo_visitors::storage::save_json(&payload, "data/raw/data.json")?;
//! let report = analyze(&payload)?;
//! print!("{}", zoo_visitors::report::render_report(&report, &Default::default()));
//! # Ok::<(), zoo_visitors::ZooError>(())
//! ```

pub mod api;
pub mod dates;
pub mod error;
pub mod models;
pub mod monthly;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod storage;
pub mod validate;

pub use api::Client;
pub use error::{SchemaLevel, ZooError};
pub use models::{DayRecord, MonthRecord, YearRecord};
pub use pipeline::{Report, analyze};
