pub mod classifier;
pub mod config;
pub mod layout;
pub mod metadata;
pub mod pipeline;
pub mod placer;
pub mod scan;
pub mod testing;

pub use classifier::{
    classify, classify_path, normalize_title, ClassificationError, MediaDescriptor, MediaKind,
    Quality,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use layout::{assign_target_path, compute_target_path, target_file_name};
pub use metadata::{
    AuthError, MetadataError, MetadataProvider, MetadataResolver, MovieMatch, NullProvider,
    ProviderSet, SeriesMatch, TmdbClient, TvdbClient,
};
pub use pipeline::{
    FileReport, FileState, Pipeline, PipelineOptions, ReportCallback, RunSummary,
};
pub use placer::{
    ApplyOutcome, FileSystem, OperationError, OperationExecutor, OperationMode,
    PlannedOperation, TokioFileSystem,
};
pub use scan::{collect_video_files, is_video_file, ScanError, VIDEO_EXTENSIONS};
