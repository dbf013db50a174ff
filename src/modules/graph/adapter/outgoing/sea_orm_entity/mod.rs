pub mod social_edges;
