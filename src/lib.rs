pub mod cli;
pub mod electronegativity;
pub mod elements;
pub mod molmass;
