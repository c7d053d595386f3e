use serde::Serialize;

use crate::constants::{MAX_DESCRIPTOR_DEPTH, NOT_APPLICABLE};
use crate::error::{VolumesError, VolumesResult};
use crate::models::{DescriptorShape, Volume, VolumeKind, VolumeResourceType};

/// Human readable identifier for a volume, as shown in the `identifier` column.
///
/// | kind          | plain                  | detailed                                  |
/// |---------------|------------------------|-------------------------------------------|
/// | container     | container handle       | `container:<h>,path:<p>[,parent:<ph>]`    |
/// | task-cache    | `pipeline/job/step`    | same                                      |
/// | resource      | `present_map(version)` | `present_resource_type(resource_type)`    |
/// | resource-type | base type name         | `present_map(base_resource_type)`         |
///
/// Anything else is `n/a`. Missing fields degrade to empty strings; the only
/// error is a resource type chain deeper than [`MAX_DESCRIPTOR_DEPTH`].
pub fn volume_identifier(volume: &Volume, detailed: bool) -> VolumesResult<String> {
    let identifier = match volume.kind() {
        VolumeKind::Container { handle, path, parent } => {
            if !detailed {
                return Ok(handle.to_string());
            }

            let mut identifier = format!("container:{},path:{}", handle, path);
            if let Some(parent) = parent {
                identifier.push_str(&format!(",parent:{}", parent));
            }
            identifier
        }
        VolumeKind::TaskCache { pipeline, job, step } => format!("{}/{}/{}", pipeline, job, step),
        VolumeKind::Resource { resource_type } => match (resource_type, detailed) {
            (Some(resource_type), true) => present_resource_type(resource_type)?,
            (Some(resource_type), false) => present_map(resource_type.version()),
            (None, _) => String::new(),
        },
        VolumeKind::ResourceType { base } => match (base, detailed) {
            (Some(base), true) => present_map(base),
            (Some(base), false) => base.name.clone(),
            (None, _) => String::new(),
        },
        VolumeKind::Unknown => NOT_APPLICABLE.to_string(),
    };

    Ok(identifier)
}

/// Flatten a mapping into a single `key:value,key:value` token.
///
/// The value is rendered as YAML (map keys in lexical order, nested maps
/// indented on their own lines), each line trimmed, the lines joined with
/// commas and every space removed. An empty or missing mapping renders as "".
pub fn present_map<T: Serialize + ?Sized>(value: &T) -> String {
    let rendered = match serde_yaml::to_string(value) {
        Ok(rendered) => rendered,
        Err(_) => return String::new(),
    };

    let trimmed = rendered.trim();
    if trimmed == "{}" || trimmed == "null" {
        return String::new();
    }

    trimmed.lines().collect::<Vec<_>>().join(",").replace(' ', "")
}

/// Resolve a resource type to its base type, recording each wrapping layer.
///
/// A base type renders as `present_map(base)`. A type built on another
/// resource type renders as `type:resource(<inner>),version:<version>`.
/// A descriptor with neither renders as "".
pub fn present_resource_type(descriptor: &VolumeResourceType) -> VolumesResult<String> {
    present_resource_type_at(descriptor, 1)
}

fn present_resource_type_at(descriptor: &VolumeResourceType, depth: usize) -> VolumesResult<String> {
    if depth > MAX_DESCRIPTOR_DEPTH {
        return Err(VolumesError::DescriptorTooDeep(MAX_DESCRIPTOR_DEPTH));
    }

    match descriptor.shape() {
        DescriptorShape::Base(base) => Ok(present_map(base)),
        DescriptorShape::Derived { inner, version } => {
            let inner = present_resource_type_at(inner, depth + 1)?;
            Ok(format!("type:resource({}),version:{}", inner, present_map(version)))
        }
        DescriptorShape::Empty => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaseResourceType, Version};
    use serde_json::{Value, json};

    fn version(pairs: &[(&str, &str)]) -> Version {
        Value::Object(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                .collect(),
        )
    }

    fn base(name: &str, pairs: &[(&str, &str)]) -> BaseResourceType {
        BaseResourceType {
            name: name.to_string(),
            version: Some(version(pairs)),
        }
    }

    fn wrap_base(base: BaseResourceType) -> VolumeResourceType {
        VolumeResourceType {
            base_resource_type: Some(base),
            ..Default::default()
        }
    }

    fn wrap_inner(inner: VolumeResourceType, pairs: &[(&str, &str)]) -> VolumeResourceType {
        VolumeResourceType {
            resource_type: Some(Box::new(inner)),
            version: Some(version(pairs)),
            ..Default::default()
        }
    }

    fn container(parent: Option<&str>) -> Volume {
        Volume {
            id: "v1".to_string(),
            worker_name: "w1".to_string(),
            volume_type: "container".to_string(),
            container_handle: Some("c1".to_string()),
            path: Some("/tmp/build/get".to_string()),
            parent_handle: parent.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_present_map_sorts_keys() {
        assert_eq!(
            present_map(&version(&[("ref", "abc"), ("branch", "main")])),
            "branch:main,ref:abc"
        );
    }

    #[test]
    fn test_present_map_empty() {
        assert_eq!(present_map(&json!({})), "");
        assert_eq!(present_map(&Value::Null), "");
    }

    #[test]
    fn test_present_map_strips_inner_spaces() {
        assert_eq!(present_map(&version(&[("message", "fix the build")])), "message:fixthebuild");
    }

    #[test]
    fn test_present_map_of_base_type() {
        assert_eq!(present_map(&base("git", &[("ref", "x")])), "name:git,version:,ref:x");
        assert_eq!(
            present_map(&BaseResourceType { name: "git".to_string(), version: None }),
            "name:git"
        );
    }

    #[test]
    fn test_present_map_of_unexpected_version_shapes() {
        let string_version = BaseResourceType {
            name: "git".to_string(),
            version: Some(json!("1.2.0")),
        };
        assert_eq!(present_map(&string_version), "name:git,version:1.2.0");
        assert_eq!(present_map(&json!({ "ref": "x", "count": 3 })), "count:3,ref:x");
    }

    #[test]
    fn test_present_resource_type_depths() {
        let depth_one = wrap_base(base("git", &[("ref", "x")]));
        assert_eq!(present_resource_type(&depth_one).unwrap(), "name:git,version:,ref:x");

        let depth_two = wrap_inner(depth_one, &[("digest", "abc123")]);
        assert_eq!(
            present_resource_type(&depth_two).unwrap(),
            "type:resource(name:git,version:,ref:x),version:digest:abc123"
        );

        let depth_three = wrap_inner(depth_two, &[("digest", "def456")]);
        assert_eq!(
            present_resource_type(&depth_three).unwrap(),
            "type:resource(type:resource(name:git,version:,ref:x),version:digest:abc123),version:digest:def456"
        );
    }

    #[test]
    fn test_present_resource_type_empty() {
        assert_eq!(present_resource_type(&VolumeResourceType::default()).unwrap(), "");

        let hollow = wrap_inner(VolumeResourceType::default(), &[]);
        assert_eq!(present_resource_type(&hollow).unwrap(), "type:resource(),version:");
    }

    #[test]
    fn test_present_resource_type_depth_cap() {
        let mut descriptor = wrap_base(base("git", &[]));
        for _ in 1..MAX_DESCRIPTOR_DEPTH {
            descriptor = wrap_inner(descriptor, &[]);
        }
        assert!(present_resource_type(&descriptor).is_ok());

        let too_deep = wrap_inner(descriptor, &[]);
        assert!(matches!(
            present_resource_type(&too_deep),
            Err(VolumesError::DescriptorTooDeep(MAX_DESCRIPTOR_DEPTH))
        ));
    }

    #[test]
    fn test_container_identifier() {
        assert_eq!(volume_identifier(&container(None), false).unwrap(), "c1");
        assert_eq!(
            volume_identifier(&container(None), true).unwrap(),
            "container:c1,path:/tmp/build/get"
        );
        assert!(!volume_identifier(&container(Some("")), true).unwrap().contains("parent:"));
        assert_eq!(
            volume_identifier(&container(Some("p1")), true).unwrap(),
            "container:c1,path:/tmp/build/get,parent:p1"
        );
    }

    #[test]
    fn test_task_cache_identifier_ignores_details() {
        let volume = Volume {
            volume_type: "task-cache".to_string(),
            pipeline_name: Some("p".to_string()),
            job_name: Some("j".to_string()),
            step_name: Some("s".to_string()),
            ..Default::default()
        };
        assert_eq!(volume_identifier(&volume, false).unwrap(), "p/j/s");
        assert_eq!(volume_identifier(&volume, true).unwrap(), "p/j/s");
    }

    #[test]
    fn test_resource_identifier() {
        let mut resource_type = wrap_base(base("git", &[("ref", "x")]));
        resource_type.version = Some(version(&[("ref", "abc")]));
        let volume = Volume {
            volume_type: "resource".to_string(),
            resource_type: Some(resource_type),
            ..Default::default()
        };

        assert_eq!(volume_identifier(&volume, false).unwrap(), "ref:abc");
        assert_eq!(volume_identifier(&volume, true).unwrap(), "name:git,version:,ref:x");
    }

    #[test]
    fn test_resource_type_identifier() {
        let volume = Volume {
            volume_type: "resource-type".to_string(),
            base_resource_type: Some(base("git", &[("ref", "x")])),
            ..Default::default()
        };

        assert_eq!(volume_identifier(&volume, false).unwrap(), "git");
        assert_eq!(volume_identifier(&volume, true).unwrap(), "name:git,version:,ref:x");
    }

    #[test]
    fn test_degraded_identifiers() {
        let unknown = Volume { volume_type: "scratch".to_string(), ..Default::default() };
        assert_eq!(volume_identifier(&unknown, false).unwrap(), "n/a");
        assert_eq!(volume_identifier(&unknown, true).unwrap(), "n/a");

        let bare_resource = Volume { volume_type: "resource".to_string(), ..Default::default() };
        assert_eq!(volume_identifier(&bare_resource, true).unwrap(), "");

        let bare_type = Volume { volume_type: "resource-type".to_string(), ..Default::default() };
        assert_eq!(volume_identifier(&bare_type, false).unwrap(), "");
    }
}
