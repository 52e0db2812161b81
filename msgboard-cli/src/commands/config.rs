//! Show resolved connection settings

use msgboard_server::DbConfig;

/// Print the descriptor the server would connect with
pub fn run_config() {
    let config = DbConfig::from_env();

    println!("host:     {}", config.host);
    println!("port:     {}", config.port);
    println!("user:     {}", config.user);
    println!("password: ***");
    println!("database: {}", config.database);
}
