/// Use cases module containing application business logic orchestration
mod render_graph;

pub use render_graph::RenderGraphUseCase;
