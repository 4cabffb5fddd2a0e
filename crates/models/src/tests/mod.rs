/// Field validation for the singer entity
pub mod validation_tests;
