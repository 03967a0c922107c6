use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;

use tangocho::config::Config;
use tangocho::db::SqliteStore;
use tangocho::server::{self, AppState};

#[tokio::main]
async fn main() {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load_or_default(config_path.as_deref());

    let _logger = match tangocho::logging::init(&config.log_level) {
        Ok(handle) => handle,
        Err(e) => panic!("{e}"),
    };

    let store = match SqliteStore::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => panic!("{e}"),
    };

    // One date per run: every activity appended by this process carries it.
    let today = Local::now().date_naive();

    let state = match AppState::new(store, &config.assets_dir, today) {
        Ok(state) => state,
        Err(e) => panic!("{e}"),
    };

    if let Err(e) = server::serve(Arc::new(state), &config.bind_addr).await {
        panic!("{e}");
    }
}
