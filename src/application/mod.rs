//! Application Layer
//!
//! Use-case orchestrators sequencing validation, authorization guards and
//! repository calls. This layer performs no local error recovery: every
//! failure from a guard propagates unchanged to the presentation boundary.

pub mod use_cases;
