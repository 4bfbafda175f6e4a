pub mod edge;
pub mod report;
pub mod severity;
pub mod version_constraint;
pub mod vertex;

pub use edge::{Edge, EdgeKind};
pub use report::{InsightsResponse, Report, ReportMeta};
pub use severity::{effective_severity, CvssScore, SeverityTier};
pub use version_constraint::{ConstraintClause, VersionConstraint};
pub use vertex::{PackageKind, Vertex, VertexKind};
