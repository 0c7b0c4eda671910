//! Hit-region lookup over a display list.
//!
//! Only explicit hit regions participate: drawable commands are presentation
//! and never intercept the pointer. Regions are tested against the inverse of
//! their recorded transform and against the clip stack active when they were
//! recorded, and the topmost match (highest z, then latest insertion) wins.

use std::collections::HashSet;

use crate::display_list::{Command, DisplayList};
use crate::scene::{ClipRect, Rect, Transform2D};

/// Stable identifier of an interactive region within a scene.
pub type RegionId = u32;

struct RegionItem {
    id: RegionId,
    order: usize,
    z: i32,
    rect: Rect,
    transform: Transform2D,
    clips: Vec<(Rect, Transform2D)>,
}

fn collect_regions(list: &DisplayList) -> Vec<RegionItem> {
    let mut items = Vec::new();
    let mut clips: Vec<(Rect, Transform2D)> = Vec::new();
    let mut tstack: Vec<Transform2D> = vec![Transform2D::identity()];
    let mut order = 0usize;

    for cmd in &list.commands {
        match cmd {
            Command::PushClip(ClipRect(rect)) => {
                clips.push((*rect, *tstack.last().unwrap()));
            }
            Command::PopClip => {
                let _ = clips.pop();
            }
            Command::PushTransform(t) => {
                tstack.push(*t);
            }
            Command::PopTransform => {
                if tstack.len() > 1 {
                    let _ = tstack.pop();
                }
            }
            Command::HitRegionRect { id, rect, z, transform } => {
                items.push(RegionItem {
                    id: *id,
                    order,
                    z: *z,
                    rect: *rect,
                    transform: *transform,
                    clips: clips.clone(),
                });
                order += 1;
            }
            _ => {}
        }
    }
    items
}

fn item_contains(item: &RegionItem, pos: [f32; 2]) -> bool {
    for (clip, t) in &item.clips {
        let local = match t.invert() {
            Some(inv) => inv.apply(pos),
            None => return false,
        };
        if !clip.contains(local) {
            return false;
        }
    }
    let local = match item.transform.invert() {
        Some(inv) => inv.apply(pos),
        None => return false,
    };
    item.rect.contains(local)
}

/// Resolve the topmost hit region under `pos`, if any.
pub fn hit_region_at(list: &DisplayList, pos: [f32; 2]) -> Option<RegionId> {
    let items = collect_regions(list);
    items
        .iter()
        .filter(|item| item_contains(item, pos))
        .max_by_key(|item| (item.z, item.order))
        .map(|item| item.id)
}

/// The set of region ids present in the list. A region appearing here is
/// considered mounted for lifecycle purposes.
pub fn mounted_regions(list: &DisplayList) -> HashSet<RegionId> {
    let mut ids = HashSet::new();
    for cmd in &list.commands {
        if let Command::HitRegionRect { id, .. } = cmd {
            ids.insert(*id);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::Viewport;
    use crate::painter::Painter;

    fn frame() -> Painter {
        Painter::begin_frame(Viewport {
            width: 200,
            height: 200,
        })
    }

    #[test]
    fn test_topmost_region_wins() {
        let mut p = frame();
        let below = Rect {
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 100.0,
        };
        let above = Rect {
            x: 40.0,
            y: 40.0,
            w: 100.0,
            h: 100.0,
        };
        p.hit_region_rect(1, below, 0);
        p.hit_region_rect(2, above, 5);
        let list = p.finish();

        assert_eq!(hit_region_at(&list, [50.0, 50.0]), Some(2));
        assert_eq!(hit_region_at(&list, [10.0, 10.0]), Some(1));
        assert_eq!(hit_region_at(&list, [180.0, 180.0]), None);
    }

    #[test]
    fn test_equal_z_later_insertion_wins() {
        let mut p = frame();
        let r = Rect {
            x: 0.0,
            y: 0.0,
            w: 50.0,
            h: 50.0,
        };
        p.hit_region_rect(1, r, 0);
        p.hit_region_rect(2, r, 0);
        let list = p.finish();
        assert_eq!(hit_region_at(&list, [25.0, 25.0]), Some(2));
    }

    #[test]
    fn test_transformed_region() {
        let mut p = frame();
        p.push_transform(Transform2D::translate(100.0, 0.0));
        p.hit_region_rect(
            7,
            Rect {
                x: 0.0,
                y: 0.0,
                w: 20.0,
                h: 20.0,
            },
            0,
        );
        p.pop_transform();
        let list = p.finish();

        assert_eq!(hit_region_at(&list, [110.0, 10.0]), Some(7));
        assert_eq!(hit_region_at(&list, [10.0, 10.0]), None);
    }

    #[test]
    fn test_clip_limits_region() {
        let mut p = frame();
        p.push_clip_rect(Rect {
            x: 0.0,
            y: 0.0,
            w: 30.0,
            h: 30.0,
        });
        p.hit_region_rect(
            3,
            Rect {
                x: 0.0,
                y: 0.0,
                w: 100.0,
                h: 100.0,
            },
            0,
        );
        p.pop_clip();
        let list = p.finish();

        assert_eq!(hit_region_at(&list, [10.0, 10.0]), Some(3));
        assert_eq!(hit_region_at(&list, [50.0, 50.0]), None);
    }

    #[test]
    fn test_mounted_regions_reflects_list() {
        let mut p = frame();
        p.hit_region_rect(
            11,
            Rect {
                x: 0.0,
                y: 0.0,
                w: 10.0,
                h: 10.0,
            },
            0,
        );
        let list = p.finish();
        let mounted = mounted_regions(&list);
        assert!(mounted.contains(&11));
        assert!(!mounted.contains(&12));
    }
}
