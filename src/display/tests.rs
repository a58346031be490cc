use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex};

use crate::config::{DisplayConfig, MissingImagePolicy};
use crate::model::{Coords, Image, Metadata, PixelBuffer, PixelType};
use crate::store::{ImageStore, MemoryStore, SharedStore};
use crate::viewer::{
    DisplayMode, HyperStackViewer, ImageProcessor, SharedViewer, StackExtents, StackPosition,
    StackViewer, VirtualStack,
};

use super::{DisplayError, DisplayEvent, EventBus, StoreStack};

fn gray(coords: Coords, value: u8) -> Image {
    Image::new(
        PixelBuffer::U8(vec![value; 4]),
        2,
        2,
        1,
        coords,
        Metadata::default(),
    )
    .expect("image")
}

fn shared_store(images: impl IntoIterator<Item = Image>) -> (Arc<MemoryStore>, SharedStore) {
    let store = Arc::new(MemoryStore::from_images(images));
    let shared: SharedStore = store.clone();
    (store, shared)
}

fn viewer(extents: StackExtents) -> SharedViewer {
    Arc::new(Mutex::new(HyperStackViewer::new(extents).expect("viewer")))
}

fn collect_positions(bus: &EventBus) -> Arc<Mutex<Vec<Coords>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.subscribe(move |event| {
        if let DisplayEvent::StackPositionChanged(coords) = event {
            sink.lock().expect("sink").push(coords.clone());
        }
    });
    seen
}

/// Reports every coordinate as present but hands out no image, as a store
/// does when an image is removed between the two calls.
struct VanishingStore {
    inner: MemoryStore,
}

impl ImageStore for VanishingStore {
    fn has_image(&self, _coords: &Coords) -> bool {
        true
    }

    fn image(&self, _coords: &Coords) -> Option<Arc<Image>> {
        None
    }

    fn any_image(&self) -> Option<Arc<Image>> {
        self.inner.any_image()
    }

    fn axes(&self) -> Vec<String> {
        self.inner.axes()
    }

    fn axis_length(&self, axis: &str) -> usize {
        self.inner.axis_length(axis)
    }

    fn max_indices(&self) -> Coords {
        self.inner.max_indices()
    }
}

/// Delegates to a [`HyperStackViewer`] and records which entry points ran.
struct RecordingViewer {
    inner: HyperStackViewer,
    calls: Vec<&'static str>,
}

impl RecordingViewer {
    fn new(inner: HyperStackViewer) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self {
            inner,
            calls: Vec::new(),
        }))
    }
}

impl StackViewer for RecordingViewer {
    fn stack_size(&self) -> usize {
        self.inner.stack_size()
    }

    fn convert_index_to_position(&self, flat_index: usize) -> StackPosition {
        self.inner.convert_index_to_position(flat_index)
    }

    fn extents(&self) -> StackExtents {
        self.inner.extents()
    }

    fn set_dimensions(&mut self, extents: StackExtents) {
        self.calls.push("set_dimensions");
        self.inner.set_dimensions(extents);
    }

    fn supports_unverified_dimensions(&self) -> bool {
        self.inner.supports_unverified_dimensions()
    }

    fn set_dimensions_unverified(&mut self, extents: StackExtents) {
        self.calls.push("set_dimensions_unverified");
        self.inner.set_dimensions_unverified(extents);
    }

    fn position(&self) -> StackPosition {
        self.inner.position()
    }

    fn current_slice(&self) -> usize {
        self.inner.current_slice()
    }

    fn set_position(&mut self, position: StackPosition) {
        self.calls.push("set_position");
        self.inner.set_position(position);
    }

    fn is_composite_mode(&self) -> bool {
        self.inner.is_composite_mode()
    }

    fn channel_processor_mut(&mut self, channel: usize) -> Option<&mut ImageProcessor> {
        self.inner.channel_processor_mut(channel)
    }
}

#[test]
fn flat_index_roundtrips_through_coords() {
    let mut images = Vec::new();
    for time in 0..2 {
        for z in 0..3 {
            for channel in 0..2 {
                images.push(gray(
                    Coords::builder().channel(channel).z(z).time(time).build(),
                    1,
                ));
            }
        }
    }
    let (_, store) = shared_store(images);
    let extents = StackExtents::new(2, 3, 2);
    let mut stack = StoreStack::new(store, Arc::new(EventBus::new()), Some(viewer(extents)));
    assert_eq!(stack.size(), 12);

    for flat_index in 1..=extents.size() {
        let coords = stack.map_flat_index_to_coords(flat_index);
        let position = StackPosition::new(
            coords.channel().expect("channel") + 1,
            coords.z().expect("z") + 1,
            coords.time().expect("time") + 1,
        );
        assert_eq!(extents.index_of(position), flat_index);
    }
}

#[test]
fn axes_missing_from_store_are_not_decoded() {
    let (_, store) = shared_store((0..4).map(|time| gray(Coords::builder().time(time).build(), 1)));
    let mut stack = StoreStack::new(
        store,
        Arc::new(EventBus::new()),
        Some(viewer(StackExtents::new(1, 1, 4))),
    );
    stack.set_coords(Coords::builder().channel(5).time(0).build());

    let coords = stack.map_flat_index_to_coords(3);
    assert_eq!(coords.time(), Some(2));
    assert_eq!(coords.channel(), Some(5));
    assert_eq!(coords.z(), None);
}

#[test]
fn missing_store_axes_are_committed_as_zero() {
    let (_, store) = shared_store([
        gray(Coords::builder().time(0).stage_position(0).build(), 1),
        gray(Coords::builder().time(1).stage_position(0).build(), 1),
    ]);
    let bus = Arc::new(EventBus::new());
    let seen = collect_positions(&bus);
    let mut stack = StoreStack::new(store, bus, Some(viewer(StackExtents::new(1, 1, 2))));

    let coords = stack.map_flat_index_to_coords(2);
    assert_eq!(coords, Coords::builder().time(1).stage_position(0).build());

    let committed = Coords::builder().time(0).stage_position(0).build();
    assert_eq!(stack.current_coords(), &committed);
    assert_eq!(*seen.lock().expect("seen"), vec![committed]);

    stack.map_flat_index_to_coords(1);
    assert_eq!(seen.lock().expect("seen").len(), 1);
}

#[test]
fn mapping_without_viewer_defaults_to_origin() {
    let (_, store) = shared_store([
        gray(Coords::builder().channel(0).time(3).build(), 1),
        gray(Coords::builder().channel(1).time(3).build(), 1),
    ]);
    let mut stack = StoreStack::new(store, Arc::new(EventBus::new()), None);
    let coords = stack.map_flat_index_to_coords(5);
    assert_eq!(coords, Coords::builder().channel(0).time(0).build());
}

#[test]
fn resolved_images_are_cached_per_channel() {
    let (memory, store) = shared_store([gray(Coords::builder().channel(0).time(0).build(), 7)]);
    let mut stack = StoreStack::new(
        store,
        Arc::new(EventBus::new()),
        Some(viewer(StackExtents::new(1, 1, 3))),
    );

    let first = stack.resolve_image(1).expect("stored image");
    let stale = stack.resolve_image(2).expect("stale image");
    assert!(Arc::ptr_eq(&first, &stale));

    let newer = memory.put_image(gray(Coords::builder().channel(0).time(2).build(), 9));
    let fresh = stack.resolve_image(3).expect("newer image");
    assert!(Arc::ptr_eq(&newer, &fresh));
    let stale = stack.resolve_image(2).expect("stale image");
    assert!(Arc::ptr_eq(&newer, &stale));
    assert!(Arc::ptr_eq(
        stack.last_valid_image(0).expect("cached"),
        &newer
    ));
}

#[test]
fn blank_policy_ignores_stale_images() {
    let (_, store) = shared_store([gray(Coords::builder().channel(0).time(0).build(), 7)]);
    let mut stack = StoreStack::new(
        store,
        Arc::new(EventBus::new()),
        Some(viewer(StackExtents::new(1, 1, 2))),
    )
    .with_config(DisplayConfig {
        missing_images: MissingImagePolicy::Blank,
        ..DisplayConfig::default()
    });

    stack.resolve_image(1).expect("stored image");
    let missing = stack.resolve_image(2).expect("blank image");
    assert_eq!(missing.pixels(), &PixelBuffer::U8(vec![0; 4]));
    assert_eq!(missing.coords().time(), Some(1));
}

#[test]
fn blank_image_matches_template_geometry() {
    let template = Image::new(
        PixelBuffer::U8(vec![200; 10_000]),
        100,
        100,
        1,
        Coords::builder().time(0).build(),
        Metadata::from_source("/data/first.tif"),
    )
    .expect("template");
    let (_, store) = shared_store([template]);
    let stack = StoreStack::new(store, Arc::new(EventBus::new()), None);

    let coords = Coords::builder().time(4).stage_position(1).build();
    let blank = stack.synthesize_blank(&coords).expect("blank");
    assert_eq!(blank.pixels(), &PixelBuffer::U8(vec![0; 10_000]));
    assert_eq!(blank.width(), 100);
    assert_eq!(blank.height(), 100);
    assert_eq!(blank.bytes_per_pixel(), 1);
    assert_eq!(blank.coords(), &coords);
    assert!(blank.metadata().is_empty());
}

#[test]
fn blank_image_needs_a_template() {
    let (_, store) = shared_store([]);
    let stack = StoreStack::new(store, Arc::new(EventBus::new()), None);
    let error = stack
        .synthesize_blank(&Coords::default())
        .expect_err("empty store");
    assert!(matches!(error, DisplayError::NoTemplateImage));
}

#[test]
fn blank_image_rejects_packed_templates() {
    let template = Image::new(
        PixelBuffer::U32(vec![0; 4]),
        2,
        2,
        1,
        Coords::default(),
        Metadata::default(),
    )
    .expect("template");
    let (_, store) = shared_store([template]);
    let stack = StoreStack::new(store, Arc::new(EventBus::new()), None);
    let error = stack
        .synthesize_blank(&Coords::default())
        .expect_err("packed pixels");
    assert!(matches!(
        error,
        DisplayError::UnsupportedEncoding(PixelType::U32)
    ));
}

#[test]
fn size_counts_viewer_axes_only() {
    let mut images = Vec::new();
    for channel in 0..3 {
        for time in 0..5 {
            images.push(gray(
                Coords::builder()
                    .channel(channel)
                    .time(time)
                    .stage_position(0)
                    .build(),
                1,
            ));
        }
    }
    let (_, store) = shared_store(images);
    let stack = StoreStack::new(store, Arc::new(EventBus::new()), None);
    assert_eq!(stack.size(), 15);

    let (_, store) = shared_store([]);
    let stack = StoreStack::new(store, Arc::new(EventBus::new()), None);
    assert_eq!(stack.size(), 1);
    assert_eq!(stack.slice_label(7), "7");
}

#[test]
fn channel_without_images_gets_blank_frame() {
    let (_, store) = shared_store((0..3).map(|time| {
        gray(Coords::builder().channel(0).time(time).build(), 50)
    }));
    let mut stack = StoreStack::new(
        store,
        Arc::new(EventBus::new()),
        Some(viewer(StackExtents::new(2, 1, 3))),
    );

    let flat_index = StackExtents::new(2, 1, 3).index_of(StackPosition::new(2, 1, 2));
    let image = stack.resolve_image(flat_index).expect("blank frame");
    assert_eq!(image.pixels(), &PixelBuffer::U8(vec![0; 4]));
    assert_eq!(image.coords(), &Coords::builder().channel(1).time(1).build());
    assert!(stack.last_valid_image(0).is_none());
    assert!(Arc::ptr_eq(
        stack.last_valid_image(1).expect("blank cached"),
        &image
    ));
}

#[test]
fn out_of_range_index_yields_no_image() {
    let (_, store) = shared_store([gray(Coords::builder().channel(0).build(), 1)]);
    let mut stack = StoreStack::new(
        store,
        Arc::new(EventBus::new()),
        Some(viewer(StackExtents::new(1, 1, 1))),
    );
    assert!(matches!(
        stack.resolve_image(2),
        Err(DisplayError::IndexOutOfRange { index: 2, size: 1 })
    ));
    assert!(stack.pixels(0).is_none());
    assert!(stack.pixels(2).is_none());
    assert!(stack.pixels(1).is_some());
}

#[test]
fn missing_viewer_yields_no_pixels() {
    let (_, store) = shared_store([gray(Coords::builder().channel(0).build(), 1)]);
    let mut stack = StoreStack::new(store, Arc::new(EventBus::new()), None);
    assert!(stack.pixels(1).is_none());
    assert!(stack.processor(1).is_none());
}

#[test]
fn multi_component_pixels_follow_flat_index() {
    let rgb = Image::new(
        PixelBuffer::U8(vec![1, 2, 3, 4, 5, 6]),
        2,
        1,
        3,
        Coords::builder().channel(0).build(),
        Metadata::default(),
    )
    .expect("rgb image");
    let (_, store) = shared_store([rgb]);
    let mut stack = StoreStack::new(
        store,
        Arc::new(EventBus::new()),
        Some(viewer(StackExtents::new(1, 1, 3))),
    );
    assert_eq!(stack.pixels(1), Some(PixelBuffer::U8(vec![1, 4])));
    assert_eq!(stack.pixels(2), Some(PixelBuffer::U8(vec![2, 5])));
    assert_eq!(stack.pixels(3), Some(PixelBuffer::U8(vec![3, 6])));

    let processor = stack.processor(1).expect("rgb processor");
    assert_eq!(processor.pixels().pixel_type(), PixelType::U32);
}

#[test]
fn failed_conversion_yields_no_processor() {
    let image = Image::new(
        PixelBuffer::U16(vec![1, 2, 3, 4, 5, 6]),
        2,
        1,
        3,
        Coords::builder().channel(0).build(),
        Metadata::default(),
    )
    .expect("image");
    let (_, store) = shared_store([image]);
    let mut stack = StoreStack::new(
        store,
        Arc::new(EventBus::new()),
        Some(viewer(StackExtents::new(1, 1, 1))),
    );
    assert!(stack.processor(1).is_none());
    assert_eq!(stack.pixels(1), Some(PixelBuffer::U16(vec![1, 4])));
}

#[test]
fn degenerate_extents_skip_verified_resize() {
    let (_, store) = shared_store([gray(Coords::builder().channel(0).z(0).time(0).build(), 1)]);
    let recording = RecordingViewer::new(HyperStackViewer::default());
    let shared: SharedViewer = recording.clone();
    let mut stack = StoreStack::new(store.clone(), Arc::new(EventBus::new()), Some(shared));

    stack.set_coords(Coords::builder().channel(0).z(0).time(0).build());
    assert!(recording.lock().expect("viewer").calls.is_empty());

    let recording = RecordingViewer::new(HyperStackViewer::default());
    let shared: SharedViewer = recording.clone();
    let mut stack = StoreStack::new(store, Arc::new(EventBus::new()), Some(shared))
        .with_config(DisplayConfig {
            skip_degenerate_extents: false,
            ..DisplayConfig::default()
        });
    stack.set_coords(Coords::builder().channel(0).z(0).time(0).build());
    assert_eq!(
        recording.lock().expect("viewer").calls,
        vec!["set_dimensions"]
    );
}

#[test]
fn extents_follow_store_axis_lengths() {
    let (_, store) = shared_store([
        gray(Coords::builder().channel(0).z(0).build(), 1),
        gray(Coords::builder().channel(1).z(3).build(), 1),
    ]);
    let recording = RecordingViewer::new(HyperStackViewer::default());
    let shared: SharedViewer = recording.clone();
    let mut stack = StoreStack::new(store, Arc::new(EventBus::new()), Some(shared));

    stack.set_coords(Coords::builder().channel(1).z(3).build());
    let viewer = recording.lock().expect("viewer");
    assert_eq!(viewer.calls, vec!["set_dimensions", "set_position"]);
    assert_eq!(viewer.extents(), StackExtents::new(2, 4, 1));
    assert_eq!(viewer.position(), StackPosition::new(2, 4, 1));
}

#[test]
fn unverified_extents_bypass_validation() {
    let (_, store) = shared_store([
        gray(Coords::builder().channel(0).build(), 1),
        gray(Coords::builder().channel(1).build(), 1),
    ]);
    let recording = RecordingViewer::new(HyperStackViewer::default().with_unverified_dimensions());
    let shared: SharedViewer = recording.clone();
    let mut stack = StoreStack::new(store, Arc::new(EventBus::new()), Some(shared));

    stack.set_coords(Coords::builder().channel(0).build());
    let viewer = recording.lock().expect("viewer");
    assert_eq!(viewer.calls, vec!["set_dimensions_unverified"]);
    assert_eq!(viewer.extents(), StackExtents::new(2, 1, 1));
}

#[test]
fn composite_mode_ignores_channel_only_moves() {
    let (_, store) = shared_store([
        gray(Coords::builder().channel(0).build(), 1),
        gray(Coords::builder().channel(1).build(), 1),
    ]);
    let recording = RecordingViewer::new(
        HyperStackViewer::new(StackExtents::new(2, 1, 1))
            .expect("viewer")
            .with_mode(DisplayMode::Composite),
    );
    let shared: SharedViewer = recording.clone();
    let mut stack = StoreStack::new(store, Arc::new(EventBus::new()), Some(shared));

    stack.set_coords(Coords::builder().channel(1).build());
    let viewer = recording.lock().expect("viewer");
    assert!(!viewer.calls.contains(&"set_position"));
    assert_eq!(viewer.position().channel, 1);
}

#[test]
fn composite_redraws_when_stage_position_changes() {
    let mut images = Vec::new();
    for position in 0..2 {
        for channel in 0..2 {
            let value = (10 * position + channel + 1) as u8;
            images.push(gray(
                Coords::builder()
                    .channel(channel)
                    .stage_position(position)
                    .build(),
                value,
            ));
        }
    }
    let (_, store) = shared_store(images);
    let mut composite = HyperStackViewer::new(StackExtents::new(2, 1, 1))
        .expect("viewer")
        .with_mode(DisplayMode::Composite);
    composite.set_channel_processors(vec![
        ImageProcessor::blank(2, 2, PixelType::U8),
        ImageProcessor::blank(2, 2, PixelType::U8),
    ]);
    let recording = RecordingViewer::new(composite);
    let shared: SharedViewer = recording.clone();
    let mut stack = StoreStack::new(store, Arc::new(EventBus::new()), Some(shared));

    stack.set_coords(Coords::builder().channel(0).stage_position(0).build());
    recording.lock().expect("viewer").calls.clear();

    stack.set_coords(Coords::builder().channel(0).stage_position(1).build());
    let viewer = recording.lock().expect("viewer");
    assert!(!viewer.calls.contains(&"set_position"));
    let processors = viewer.inner.channel_processors();
    assert_eq!(processors[0].pixels(), &PixelBuffer::U8(vec![11; 4]));
    assert_eq!(processors[1].pixels(), &PixelBuffer::U8(vec![12; 4]));
}

#[test]
fn non_composite_views_are_not_force_redrawn() {
    let (_, store) = shared_store([
        gray(Coords::builder().channel(0).stage_position(0).build(), 1),
        gray(Coords::builder().channel(0).stage_position(1).build(), 2),
    ]);
    let mut plain = HyperStackViewer::new(StackExtents::new(1, 1, 1)).expect("viewer");
    plain.set_channel_processors(vec![ImageProcessor::blank(2, 2, PixelType::U8)]);
    let recording = RecordingViewer::new(plain);
    let shared: SharedViewer = recording.clone();
    let mut stack = StoreStack::new(store, Arc::new(EventBus::new()), Some(shared));

    stack.set_coords(Coords::builder().channel(0).stage_position(1).build());
    let viewer = recording.lock().expect("viewer");
    assert_eq!(
        viewer.inner.channel_processors()[0].pixels(),
        &PixelBuffer::U8(vec![0; 4])
    );
}

#[test]
fn listeners_see_commits_in_subscription_order() {
    let (_, store) = shared_store([gray(Coords::builder().time(0).build(), 1)]);
    let bus = Arc::new(EventBus::new());
    let order = Arc::new(Mutex::new(Vec::new()));
    for name in ["first", "second"] {
        let order = Arc::clone(&order);
        bus.subscribe(move |event| {
            if let DisplayEvent::StackPositionChanged(coords) = event {
                order
                    .lock()
                    .expect("order")
                    .push(format!("{name}:{}", coords.viewer_index("time")));
            }
        });
    }
    let mut stack = StoreStack::new(store, Arc::clone(&bus), None);
    stack.set_coords(Coords::builder().time(0).build());
    stack.set_coords(Coords::builder().time(3).build());

    assert_eq!(
        *order.lock().expect("order"),
        vec!["first:0", "second:0", "first:3", "second:3"]
    );
    assert_eq!(stack.current_coords().time(), Some(3));
}

#[test]
fn nested_posts_are_delivered_after_the_current_event() {
    let bus = Arc::new(EventBus::new());
    let order = Arc::new(Mutex::new(Vec::new()));

    let reposting = Arc::clone(&bus);
    let first = Arc::clone(&order);
    bus.subscribe(move |event| {
        if let DisplayEvent::StackPositionChanged(coords) = event {
            first.lock().expect("order").push(format!("a{coords}"));
            if coords.is_empty() {
                reposting.post(DisplayEvent::StackPositionChanged(
                    Coords::builder().z(1).build(),
                ));
            }
        }
    });
    let second = Arc::clone(&order);
    let id = bus.subscribe(move |event| {
        if let DisplayEvent::StackPositionChanged(coords) = event {
            second.lock().expect("order").push(format!("b{coords}"));
        }
    });

    bus.post(DisplayEvent::StackPositionChanged(Coords::default()));
    assert_eq!(
        *order.lock().expect("order"),
        vec!["a<>", "b<>", "a<z=1>", "b<z=1>"]
    );

    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
}

#[test]
fn new_viewer_event_replaces_viewer() {
    let (_, store) = shared_store([gray(Coords::builder().channel(0).build(), 4)]);
    let bus = Arc::new(EventBus::new());
    let mut stack = StoreStack::new(store, Arc::clone(&bus), None);
    assert!(stack.pixels(1).is_none());

    bus.post(DisplayEvent::NewViewer(viewer(StackExtents::new(1, 1, 1))));
    assert!(stack.viewer().is_some());
    assert_eq!(stack.current_coords(), &Coords::default());
    assert_eq!(stack.pixels(1), Some(PixelBuffer::U8(vec![4; 4])));

    assert_eq!(bus.subscriber_count(), 1);
    drop(stack);
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn image_vanishing_after_lookup_counts_as_missing() {
    let store: SharedStore = Arc::new(VanishingStore {
        inner: MemoryStore::from_images([gray(Coords::builder().channel(0).time(0).build(), 5)]),
    });
    let mut stack = StoreStack::new(
        store,
        Arc::new(EventBus::new()),
        Some(viewer(StackExtents::new(1, 1, 1))),
    );

    let blank = stack.resolve_image(1).expect("blank stands in");
    assert_eq!(blank.pixels(), &PixelBuffer::U8(vec![0; 4]));
    assert_eq!(blank.coords(), &Coords::builder().channel(0).time(0).build());

    let stale = stack.resolve_image(1).expect("last valid stands in");
    assert!(Arc::ptr_eq(&blank, &stale));
}

#[test]
fn replace_viewer_swaps_the_slot() {
    let (_, store) = shared_store([gray(Coords::builder().z(0).build(), 3)]);
    let mut stack = StoreStack::new(store, Arc::new(EventBus::new()), None);
    assert!(matches!(stack.require_viewer(), Err(DisplayError::NoViewer)));

    let attached = viewer(StackExtents::new(1, 1, 1));
    stack.replace_viewer(Some(Arc::clone(&attached)));
    let current = stack.require_viewer().expect("viewer attached");
    assert!(Arc::ptr_eq(&current, &attached));
    assert_eq!(stack.pixels(1), Some(PixelBuffer::U8(vec![3; 4])));

    stack.replace_viewer(None);
    assert!(matches!(stack.require_viewer(), Err(DisplayError::NoViewer)));
    assert!(stack.pixels(1).is_none());
}

#[test]
fn bus_keeps_delivering_after_a_listener_panics() {
    let bus = EventBus::new();
    let seen = collect_positions(&bus);
    let faulty = bus.subscribe(|event| {
        if let DisplayEvent::StackPositionChanged(coords) = event {
            if coords.z() == Some(9) {
                panic!("listener failure");
            }
        }
    });

    let result = catch_unwind(AssertUnwindSafe(|| {
        bus.post(DisplayEvent::StackPositionChanged(Coords::builder().z(9).build()));
    }));
    assert!(result.is_err());
    assert!(bus.unsubscribe(faulty));

    bus.post(DisplayEvent::StackPositionChanged(Coords::builder().z(1).build()));
    assert_eq!(
        *seen.lock().expect("sink"),
        vec![Coords::builder().z(9).build(), Coords::builder().z(1).build()]
    );
}
