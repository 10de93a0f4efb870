//! AR wall placement
//!
//! Toggles the court between its fixed scene position and an AR anchor on
//! the room's key wall. Wall detection itself belongs to the host's
//! spatial-anchor subsystem; this module only asks for the wall and records
//! where the court was mounted.

use log::{error, info};
use serde::{Deserialize, Serialize};

/// Pose of a detected wall anchor, reported by the host AR subsystem
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallPose {
    pub position: [f32; 3],
    /// Unit normal pointing out of the wall
    pub forward: [f32; 3],
}

/// Port to the host's spatial-anchor service
pub trait WallAnchors {
    /// The room's key wall, if one has been detected
    fn key_wall(&self) -> Option<WallPose>;
}

/// AR mode state for the court
#[derive(Debug, Default)]
pub struct ArPlacement {
    active: bool,
    mounted: Option<WallPose>,
}

impl ArPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Where the court was mounted, facing into the room
    pub fn mounted(&self) -> Option<WallPose> {
        self.mounted
    }

    pub fn state_label(&self) -> &'static str {
        if self.active { "AR Mode: ON" } else { "AR Mode: OFF" }
    }

    /// Flip AR mode. Enabling queries the anchor service and mounts the
    /// court on the key wall; a missing wall leaves the court unmounted.
    /// Disabling removes the mounted court. Returns the new active state.
    pub fn toggle(&mut self, anchors: &dyn WallAnchors) -> bool {
        self.active = !self.active;
        if self.active {
            match anchors.key_wall() {
                Some(wall) => {
                    // Court faces back into the room, opposite the wall normal
                    let mounted = WallPose {
                        position: wall.position,
                        forward: [-wall.forward[0], -wall.forward[1], -wall.forward[2]],
                    };
                    info!("court mounted on key wall at {:?}", mounted.position);
                    self.mounted = Some(mounted);
                }
                None => {
                    error!("no key wall detected in the current room");
                }
            }
        } else {
            info!("AR mode disabled, court unmounted");
            self.mounted = None;
        }
        self.active
    }
}
