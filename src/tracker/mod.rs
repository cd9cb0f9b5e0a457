// Issue tracker access — REST client, domain models, and the collaborator traits.
//
// The pipeline only ever talks to the traits in `traits`, so the REST client
// can be swapped for an in-memory fake in tests.

pub mod client;
pub mod models;
pub mod traits;
