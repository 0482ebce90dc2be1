mod stub_server;

pub use stub_server::StubServer;
