mod config;

pub use config::{
    Config, Target, config_path, get_target, load_config, load_config_from, save_config,
    save_config_to,
};
