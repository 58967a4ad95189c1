//! Tests for stock credits and debits through donations, manual credits and aid
//! preparation resource usage.
