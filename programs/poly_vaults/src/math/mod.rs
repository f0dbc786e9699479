pub mod casting;
pub mod fees;
pub mod safe_math;
pub mod shares;
