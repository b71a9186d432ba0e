pub mod city;
pub mod reviews;
pub mod search;
pub mod traits;

pub use city::CityDirectoryClient;
pub use reviews::ReviewClient;
pub use search::SearchClient;
pub use traits::CityDirectory;
