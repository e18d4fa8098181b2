pub mod mock_transit_client;

pub use mock_transit_client::MockTransitClient;
