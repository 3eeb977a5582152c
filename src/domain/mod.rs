pub mod amortization;
pub mod feasibility;
pub mod money;
pub mod mortgage;
pub mod ports;
pub mod rate;
