mod passworkshop;

pub use passworkshop::run;
