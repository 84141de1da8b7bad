//! realty-crm - record core of a real-estate CRM
//!
//! This library holds everything the CRM screens (leads, deals, meetings,
//! users, notifications) share underneath their markup: typed records,
//! search filtering, ordering, calendar-day grouping, explicit status
//! transition tables, in-memory repositories and the admin user API client.
//!
//! # Modules
//!
//! * [`entities`] - Typed records and their identity
//! * [`status`] - Status enums and transition tables
//! * [`listing`] - Filtering, sorting and day grouping of record lists
//! * [`repositories`] - CRUD collections and the shared deal store
//! * [`backend`] - Remote API interfaces and the HTTP user directory
//! * [`services`] - Screen-facing services built on the above
//! * [`analytics`] - Dashboard percentages and breakdowns
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup

/// Dashboard figures derived from record lists
pub mod analytics;

/// Remote API interfaces and clients
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Typed CRM records
pub mod entities;

/// Error taxonomy and user-facing alerts
pub mod error;

/// Derived list views
pub mod listing;

/// Logging utilities
pub mod logger;

/// Repository layer for record collections
pub mod repositories;

/// Screen-facing services
pub mod services;

/// Status enums and transition tables
pub mod status;

/// Utility functions for date/time handling
pub mod utils;

pub use error::{Alert, CrmError, CrmResult};
