pub mod graduate;

pub use graduate::GraduateAgent;
