//! Quantile estimation over buffered samples
//!
//! # Example
//!
//! ```
//! use pipestats::quantiles::nearest_rank;
//!
//! let mut sample = vec![9.0, 1.0, 5.0, 3.0, 7.0];
//! sample.sort_by(f64::total_cmp);
//!
//! let q = nearest_rank::quartiles(&sample).unwrap();
//! println!("Median: {}", q.median);
//! ```

pub mod nearest_rank;

pub use nearest_rank::{quartiles, Quartiles};
