//! Database integration tests
//!
//! Run against PostgreSQL when `DATABASE_URL` is set.
