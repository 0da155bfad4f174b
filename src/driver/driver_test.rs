#[cfg(test)]
mod tests {
    use crate::driver::{run, Config};
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, name: &str) -> Config {
        Config {
            path: dir.path().join(name),
        }
    }

    #[test]
    fn test_default_config_targets_the_original_filename() {
        let config = Config::default();
        assert_eq!(config.path.to_str(), Some("nova-forum-openapi.yaml"));
    }

    #[test]
    fn test_missing_file_exits_nonzero() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, "does-not-exist.yaml");

        assert_eq!(run(&config), 1);
    }

    #[test]
    fn test_swagger_prefix_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, "swagger.yaml");
        fs::write(&config.path, "swagger: 2.0\ninfo:\n  title: Old\n").unwrap();

        assert_eq!(run(&config), 1);
    }

    #[test]
    fn test_leading_whitespace_fails_the_prefix_check() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, "indented.yaml");
        fs::write(&config.path, "\nopenapi: 3.0.3\n").unwrap();

        assert_eq!(run(&config), 1);
    }

    #[test]
    fn test_well_formed_file_exits_zero() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, "api.yaml");

        let mut file = fs::File::create(&config.path).unwrap();
        writeln!(file, "openapi: 3.0.3").unwrap();
        writeln!(file, "info:").unwrap();
        writeln!(file, "  title: Nova Forum API").unwrap();
        writeln!(file, "  version: 1.2.0").unwrap();
        writeln!(file, "paths:").unwrap();
        writeln!(file, "  /posts:").unwrap();
        writeln!(file, "    get: {{}}").unwrap();
        drop(file);

        assert_eq!(run(&config), 0);
    }

    #[test]
    fn test_prefix_alone_is_enough_to_exit_zero() {
        // The default run path never consults the structural validator, so
        // a file that would fail it still reports success here.
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, "minimal.yaml");
        fs::write(&config.path, "openapi: 3.0.3\n").unwrap();

        assert_eq!(run(&config), 0);
    }
}
