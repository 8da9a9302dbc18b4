use crate::plugin::SnapshotSwitcherPluginConfig;
use bevy::prelude::*;
use snapshot_switcher::ListenerPose;

/// Marks the entity whose pose drives every snapshot switcher.
///
/// Without a marked entity the first [`Camera`] is used, unless
/// camera fallback is disabled in the plugin config.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct SnapshotListener;

/// Listener entity resolved once and reused on every frame.
///
/// A camera picked as fallback is replaced as soon as a [`SnapshotListener`]
/// appears.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ResolvedListener {
    entity: Option<Entity>,
    from_fallback: bool,
}

impl ResolvedListener {
    pub fn entity(&self) -> Option<Entity> {
        self.entity
    }

    /// Pin the listener to a specific entity.
    pub fn set(&mut self, entity: Entity) {
        self.entity = Some(entity);
        self.from_fallback = false;
    }

    /// Whether the current listener is the camera fallback.
    pub fn is_fallback(&self) -> bool {
        self.entity.is_some() && self.from_fallback
    }

    pub(crate) fn set_fallback(&mut self, entity: Entity) {
        self.entity = Some(entity);
        self.from_fallback = true;
    }

    /// Forget the current listener; it is resolved again next frame.
    pub fn clear(&mut self) {
        self.entity = None;
        self.from_fallback = false;
    }
}

/// Convert a global transform into the pose the switcher consumes.
pub fn listener_pose(transform: &GlobalTransform) -> ListenerPose {
    let (_, rotation, translation) = transform.to_scale_rotation_translation();
    ListenerPose::new(translation, rotation)
}

/// Resolve the listener entity if none is cached, the cached one lost its
/// transform, or the cached one is a fallback camera and a marked entity exists.
pub fn resolve_listener(
    config: Res<SnapshotSwitcherPluginConfig>,
    mut resolved: ResMut<ResolvedListener>,
    marked: Query<Entity, (With<SnapshotListener>, With<GlobalTransform>)>,
    cameras: Query<Entity, (With<Camera>, With<GlobalTransform>)>,
    transforms: Query<(), With<GlobalTransform>>,
) {
    if let Some(entity) = resolved.entity {
        if transforms.contains(entity) {
            let Some(listener) = marked.iter().next().filter(|_| resolved.from_fallback) else {
                return;
            };
            info!(
                "Snapshot listener {} replaces fallback camera {}",
                listener, entity
            );
            resolved.set(listener);
            return;
        }
        debug!("Snapshot listener {} is gone, resolving again", entity);
        resolved.clear();
    }

    if let Some(entity) = marked.iter().next() {
        info!("Snapshot listener resolved to {}", entity);
        resolved.set(entity);
    } else if config.camera_fallback {
        if let Some(entity) = cameras.iter().next() {
            info!("Snapshot listener falls back to camera {}", entity);
            resolved.set_fallback(entity);
        }
    }
}
