/*

    Renderer configuration.

    Plain data holder, every field has a default so a
    configuration file only needs to list what it changes.
    Keys are camelCase in the file, e.g.

    {
        "width": 640,
        "samplesPerPixel": "16",
        "quietProgress": true
    }

    @date: 12 Nov, 2025
    @author: bartu
*/

use std::path::{Path, PathBuf};

use crate::prelude::*;
use crate::json_parser::{deser_bool, deser_float, deser_int, parse_json_file};

#[derive(Debug, Clone, PartialEq, SmartDefault, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    #[default(320)]
    #[serde(deserialize_with = "deser_int")]
    pub width: Int,
    #[default(270)]
    #[serde(deserialize_with = "deser_int")]
    pub height: Int,

    #[default(1)]
    #[serde(deserialize_with = "deser_int")]
    pub frames: Int,
    #[default(30.0)]
    #[serde(deserialize_with = "deser_float")]
    pub frames_per_second: Float,

    #[default(0.0)]
    #[serde(deserialize_with = "deser_float")]
    pub exposure_second: Float,
    #[default(1)]
    #[serde(deserialize_with = "deser_int")]
    pub exposure_slice: Int,

    #[default(4)]
    #[serde(deserialize_with = "deser_int")]
    pub samples_per_pixel: Int,
    #[default(2)]
    #[serde(deserialize_with = "deser_int")]
    pub pixel_sub_samples: Int,

    #[default(1)]
    #[serde(deserialize_with = "deser_int")]
    pub min_depth: Int,
    #[default(4)]
    #[serde(deserialize_with = "deser_int")]
    pub max_depth: Int,
    #[default(0.005)]
    #[serde(deserialize_with = "deser_float")]
    pub min_russian_roulette_cut_off: Float,

    #[default(3)]
    #[serde(deserialize_with = "deser_int")]
    pub framebuffer_stock_count: Int,
    #[default(64)]
    #[serde(deserialize_with = "deser_int")]
    pub tile_size: Int,
    #[default(true)]
    #[serde(deserialize_with = "deser_bool")]
    pub scramble_tile: bool,

    #[default(60.0)]
    #[serde(deserialize_with = "deser_float")]
    pub limit_sec: Float,
    #[default(-1.0)]
    #[serde(deserialize_with = "deser_float")]
    pub progress_interval_sec: Float, // negative disables progress reports
    #[default(0)]
    #[serde(deserialize_with = "deser_int")]
    pub max_threads: Int, // <= 0 means use every core

    #[default(false)]
    #[serde(deserialize_with = "deser_bool")]
    pub quiet_progress: bool,
    #[default(true)]
    #[serde(deserialize_with = "deser_bool")]
    pub wait_until_finish: bool,

    #[default("")]
    pub input_file: String,
    #[default("output")]
    pub output_dir: String,
    #[default("output")]
    pub output_name: String,
    #[default("png")]
    pub output_ext: String,
}

impl Config {

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let span = tracing::span!(tracing::Level::INFO, "load_config");
        let _enter = span.enter();

        let config: Config = parse_json_file(&path)?;
        info!("Loaded configuration from {}", path.as_ref().display());
        debug!("{:#?}", config);
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = serde_json::from_str(s)?;
        Ok(config)
    }

    /// <outputDir>/<outputName>.<outputExt>
    pub fn output_path(&self) -> PathBuf {
        self.output_path_with_ext(&self.output_ext)
    }

    pub fn output_path_with_ext(&self, ext: &str) -> PathBuf {
        Path::new(&self.output_dir).join(format!("{}.{}", self.output_name, ext))
    }

    /// Worker threads to use, max_threads <= 0 falls back to rayon's pool size.
    pub fn thread_count(&self) -> usize {
        if self.max_threads > 0 {
            self.max_threads as usize
        } else {
            rayon::current_num_threads()
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        if self.quiet_progress {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (320, 270));
        assert_eq!(config.frames, 1);
        assert_eq!(config.frames_per_second, 30.0);
        assert_eq!(config.exposure_second, 0.0);
        assert_eq!(config.exposure_slice, 1);
        assert_eq!(config.samples_per_pixel, 4);
        assert_eq!(config.pixel_sub_samples, 2);
        assert_eq!((config.min_depth, config.max_depth), (1, 4));
        assert_eq!(config.min_russian_roulette_cut_off, 0.005);
        assert_eq!(config.framebuffer_stock_count, 3);
        assert_eq!(config.tile_size, 64);
        assert!(config.scramble_tile);
        assert_eq!(config.limit_sec, 60.0);
        assert_eq!(config.progress_interval_sec, -1.0);
        assert_eq!(config.max_threads, 0);
        assert!(!config.quiet_progress);
        assert!(config.wait_until_finish);
        assert_eq!(config.input_file, "");
        assert_eq!(config.output_path(), Path::new("output").join("output.png"));
    }

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = Config::from_json_str(r#"{
            "width": 640,
            "samplesPerPixel": "16",
            "minRussianRouletteCutOff": 0.01,
            "quietProgress": "true",
            "outputDir": "renders",
            "outputExt": "exr"
        }"#).unwrap();

        assert_eq!(config.width, 640);
        assert_eq!(config.height, 270);
        assert_eq!(config.samples_per_pixel, 16);
        assert_eq!(config.min_russian_roulette_cut_off, 0.01);
        assert!(config.quiet_progress);
        assert_eq!(config.log_level(), tracing::Level::WARN);
        assert_eq!(config.output_path(), Path::new("renders").join("output.exr"));
        assert_eq!(config.output_path_with_ext("json"), Path::new("renders").join("output.json"));
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(Config::from_json_str(r#"{"tileSize": "big"}"#).is_err());
        assert!(Config::from_json_str(r#"{"scrambleTile": 3.5}"#).is_err());
        assert!(Config::from_json_str("not json").is_err());
    }

    #[test]
    fn thread_count_falls_back_to_pool_size() {
        let mut config = Config::default();
        assert_eq!(config.thread_count(), rayon::current_num_threads());
        config.max_threads = -2;
        assert_eq!(config.thread_count(), rayon::current_num_threads());
        config.max_threads = 3;
        assert_eq!(config.thread_count(), 3);
    }

    #[test]
    fn load_reports_missing_file() {
        assert!(Config::load("./does/not/exist.json").is_err());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("fury_bounds_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"maxThreads": 2, "inputFile": "probe.json"}"#).unwrap();
        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.max_threads, 2);
        assert_eq!(config.input_file, "probe.json");
    }
}
