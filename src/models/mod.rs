pub mod team;
pub mod volume;

pub use team::Team;
pub use volume::{
    BaseResourceType, DescriptorShape, Version, Volume, VolumeKind, VolumeResourceType,
};
