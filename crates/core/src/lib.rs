mod scan;

pub use scan::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
