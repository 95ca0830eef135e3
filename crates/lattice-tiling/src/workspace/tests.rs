use lattice_common::{
    DocumentId, EventBus, KeyEvent, MouseEvent, PaneId, Rect, TilingError, WorkspaceEvent,
};

use crate::binding::{ContentSpan, DocumentBinding, InMemoryDocuments};
use crate::commands::TilingCommand;
use crate::content::text::TextTranslator;
use crate::content::ReturnMessage;
use crate::layout::TilingOptions;
use crate::testing::{workspace, Recorder};
use crate::tree::Direction;

use super::Workspace;

fn drag(ws: &mut Workspace<InMemoryDocuments>, from: (i32, i32), to: (i32, i32)) {
    ws.handle_mouse(&MouseEvent::pressed(from.0, from.1));
    ws.handle_mouse(&MouseEvent::dragged(to.0, to.1));
    ws.handle_mouse(&MouseEvent::released(to.0, to.1));
}

fn text_of(ws: &Workspace<InMemoryDocuments>, pane: PaneId) -> String {
    let doc = ws.document_of(pane).unwrap();
    ws.bindings().content(doc).unwrap().text
}

// -- Construction --

#[test]
fn new_workspace_is_single_focused_leaf() {
    let ws = workspace(100, 100);
    assert_eq!(ws.root(), ws.focused());
    assert!(ws.is_leaf(ws.root()).unwrap());
    assert_eq!(ws.bounds(ws.root()).unwrap(), Rect::new(0, 0, 100, 100));
    assert_eq!(ws.bindings().current(), Some(ws.focused_document().unwrap()));
    ws.check_invariants().unwrap();
}

#[test]
fn negative_bounds_rejected() {
    let result = Workspace::new(
        Rect::new(0, 0, -1, 100),
        InMemoryDocuments::default(),
        Box::new(TextTranslator),
        TilingOptions::default(),
    );
    assert!(matches!(result, Err(TilingError::Dimension { width: -1, .. })));
}

// -- Split / close scenarios --

#[test]
fn horizontal_split_then_close_restores_single_leaf() {
    let mut ws = workspace(100, 100);
    let original = ws.root();

    let split = ws.split_focused(Direction::Horizontal).unwrap();
    assert_eq!(ws.root(), split);
    let lower = ws.first_child(split).unwrap();
    let upper = ws.second_child(split).unwrap();
    assert_eq!(lower, original);
    assert_eq!(ws.bounds(lower).unwrap(), Rect::new(0, 50, 100, 50));
    assert_eq!(ws.bounds(upper).unwrap(), Rect::new(0, 0, 100, 50));
    assert_eq!(ws.focused(), lower);
    ws.check_invariants().unwrap();

    let survivor = ws.close_focused().unwrap();
    assert_eq!(survivor, upper);
    assert_eq!(ws.root(), upper);
    assert_eq!(ws.focused(), upper);
    assert!(ws.is_leaf(upper).unwrap());
    assert_eq!(ws.bounds(upper).unwrap(), Rect::new(0, 0, 100, 100));
    assert_eq!(ws.leaf_count(), 1);
    ws.check_invariants().unwrap();
}

#[test]
fn vertical_drag_then_resize_keeps_proportion() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(split).unwrap();
    let right = ws.second_child(split).unwrap();
    assert_eq!(ws.bounds(left).unwrap().width, 50);
    assert_eq!(ws.bounds(right).unwrap().width, 50);

    drag(&mut ws, (50, 50), (60, 50));
    assert_eq!(ws.bounds(left).unwrap(), Rect::new(0, 0, 60, 100));
    assert_eq!(ws.bounds(right).unwrap(), Rect::new(60, 0, 40, 100));
    let fraction = ws.pane(split).unwrap().as_split().unwrap().fraction();
    assert!((fraction - 0.6).abs() < 1e-9);

    ws.resize(200, 100).unwrap();
    assert_eq!(ws.bounds(left).unwrap().width, 120);
    assert_eq!(ws.bounds(right).unwrap().width, 80);
    ws.check_invariants().unwrap();
}

#[test]
fn horizontal_drag_up_grows_lower_child() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Horizontal).unwrap();
    let lower = ws.first_child(split).unwrap();

    drag(&mut ws, (50, 50), (50, 40));
    assert_eq!(ws.bounds(lower).unwrap(), Rect::new(0, 40, 100, 60));
    assert!(!ws.is_dragging());
}

#[test]
fn drag_past_minimum_is_ignored() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(split).unwrap();

    ws.handle_mouse(&MouseEvent::pressed(50, 50));
    assert!(ws.is_dragging());
    let reply = ws.handle_mouse(&MouseEvent::dragged(99, 50));
    assert_eq!(reply, ReturnMessage::Consumed);
    assert_eq!(ws.bounds(left).unwrap().width, 50);
    ws.handle_mouse(&MouseEvent::released(99, 50));
    assert!(!ws.is_dragging());
}

#[test]
fn stale_drag_cleared_by_next_press() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(split).unwrap();

    ws.handle_mouse(&MouseEvent::pressed(50, 50));
    ws.handle_mouse(&MouseEvent::dragged(55, 50));
    // release lost; the next press outside the band is an ordinary click
    ws.handle_mouse(&MouseEvent::pressed(90, 10));
    assert!(!ws.is_dragging());
    assert_eq!(ws.focused(), right);
    assert!(!ws.pane(split).unwrap().as_split().unwrap().is_dragging());
    ws.check_invariants().unwrap();
}

#[test]
fn band_press_focuses_leaf_under_pointer() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(split).unwrap();
    let right = ws.second_child(split).unwrap();
    assert_eq!(ws.focused(), left);

    // (51, 10) is on the band and inside the right leaf only
    let reply = ws.handle_mouse(&MouseEvent::pressed(51, 10));
    assert_eq!(reply, ReturnMessage::Redraw);
    assert!(ws.is_dragging());
    ws.handle_mouse(&MouseEvent::released(51, 10));
    assert_eq!(ws.focused(), right);
    assert!(!ws.has_focus(left));

    let reply = ws.handle_mouse(&MouseEvent::pressed(49, 10));
    ws.handle_mouse(&MouseEvent::released(49, 10));
    assert_eq!(reply, ReturnMessage::Redraw);
    assert_eq!(ws.focused(), left);

    // pressing the band again inside the focused leaf changes nothing
    let reply = ws.handle_mouse(&MouseEvent::pressed(48, 10));
    ws.handle_mouse(&MouseEvent::released(48, 10));
    assert_eq!(reply, ReturnMessage::Consumed);
    assert_eq!(ws.focused(), left);
    ws.check_invariants().unwrap();
}

#[test]
fn band_press_in_nested_split_focuses_inner_leaf() {
    let mut ws = workspace(100, 100);
    let outer = ws.split_focused(Direction::Vertical).unwrap();
    let inner = ws.split_focused(Direction::Horizontal).unwrap();
    let upper = ws.second_child(inner).unwrap();
    let right = ws.second_child(outer).unwrap();

    // horizontal band of the inner split, upper half
    ws.handle_mouse(&MouseEvent::pressed(10, 49));
    ws.handle_mouse(&MouseEvent::released(10, 49));
    assert_eq!(ws.focused(), upper);

    // outer band, just right of the boundary
    ws.handle_mouse(&MouseEvent::pressed(50, 80));
    ws.handle_mouse(&MouseEvent::released(50, 80));
    assert_eq!(ws.focused(), right);
    ws.check_invariants().unwrap();
}

#[test]
fn drag_to_extreme_coordinates_is_ignored() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(split).unwrap();

    ws.handle_mouse(&MouseEvent::pressed(50, 50));
    for x in [i32::MIN, i32::MAX] {
        let reply = ws.handle_mouse(&MouseEvent::dragged(x, 50));
        assert_eq!(reply, ReturnMessage::Consumed);
    }
    ws.handle_mouse(&MouseEvent::released(i32::MAX, 50));
    assert_eq!(ws.bounds(left).unwrap().width, 50);
    assert!(!ws.is_dragging());
}

#[test]
fn huge_workspace_keeps_geometry_consistent() {
    let mut ws = workspace(100, 100);
    ws.split_focused(Direction::Vertical).unwrap();
    ws.resize(i32::MAX, i32::MAX).unwrap();
    let layout = ws.compute_layout();
    assert_eq!(layout[0].1.width + layout[1].1.width, i32::MAX);
    ws.check_invariants().unwrap();
    let mut rec = Recorder::default();
    ws.render(&mut rec);
    assert_eq!(rec.fills.len(), 1);
}

#[test]
fn split_then_resize_back_restores_geometry() {
    let mut ws = workspace(100, 80);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let before: Vec<_> = ws.compute_layout();
    ws.resize(100, 80).unwrap();
    assert_eq!(ws.compute_layout(), before);
    let total: i32 = before.iter().map(|(_, r)| r.width).sum();
    assert_eq!(total, 100);
    let fraction = ws.pane(split).unwrap().as_split().unwrap().fraction();
    assert!((fraction - 0.5).abs() < f64::EPSILON);
}

#[test]
fn close_new_sibling_restores_original_viewport() {
    let mut ws = workspace(100, 100);
    let original = ws.root();
    let before = *ws.viewport(original).unwrap();

    let split = ws.split_focused(Direction::Vertical).unwrap();
    let created = ws.second_child(split).unwrap();
    ws.close(created).unwrap();

    assert_eq!(ws.root(), original);
    assert_eq!(*ws.viewport(original).unwrap(), before);
    assert_eq!(ws.focused(), original);
}

#[test]
fn nested_close_splices_into_grandparent() {
    let mut ws = workspace(100, 100);
    let outer = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(outer).unwrap();
    let inner = ws.split_focused(Direction::Horizontal).unwrap();
    assert_eq!(ws.first_child(outer).unwrap(), inner);
    let inner_second = ws.second_child(inner).unwrap();

    let survivor = ws.close(left).unwrap();
    assert_eq!(survivor, inner_second);
    assert_eq!(ws.first_child(outer).unwrap(), inner_second);
    assert_eq!(ws.parent(inner_second).unwrap(), Some(outer));
    assert_eq!(ws.bounds(inner_second).unwrap(), Rect::new(0, 0, 50, 100));
    assert!(matches!(ws.pane(inner), Err(TilingError::UnknownPane(_))));
    ws.check_invariants().unwrap();
}

#[test]
fn closing_unfocused_leaf_keeps_focus_inside_sibling() {
    let mut ws = workspace(100, 100);
    let outer = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(outer).unwrap();
    let right = ws.second_child(outer).unwrap();
    ws.split_focused(Direction::Horizontal).unwrap();
    assert_eq!(ws.focused(), left);

    ws.close(right).unwrap();
    assert_eq!(ws.focused(), left);
    ws.check_invariants().unwrap();
}

#[test]
fn closing_unfocused_leaf_focuses_its_sibling() {
    let mut ws = workspace(100, 100);
    let outer = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(outer).unwrap();
    let right = ws.second_child(outer).unwrap();
    let inner = ws.split_focused(Direction::Horizontal).unwrap();
    let upper = ws.second_child(inner).unwrap();
    ws.set_focused(right).unwrap();

    let survivor = ws.close(upper).unwrap();
    assert_eq!(survivor, left);
    assert_eq!(ws.focused(), left);
    assert_eq!(ws.bindings().current(), Some(ws.focused_document().unwrap()));
    ws.check_invariants().unwrap();
}

#[test]
fn close_focused_moves_to_first_leaf_of_split_sibling() {
    let mut ws = workspace(100, 100);
    let outer = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(outer).unwrap();
    let right = ws.second_child(outer).unwrap();
    ws.set_focused(right).unwrap();
    let inner = ws.split_focused(Direction::Vertical).unwrap();

    ws.set_focused(left).unwrap();
    let survivor = ws.close_focused().unwrap();
    assert_eq!(survivor, inner);
    assert_eq!(ws.root(), inner);
    assert_eq!(ws.focused(), right);
    ws.check_invariants().unwrap();
}

#[test]
fn closing_last_leaf_rebinds_to_welcome() {
    let mut ws = workspace(100, 100);
    let root = ws.root();
    let old = ws.focused_document().unwrap();
    ws.bindings_mut().edit(old, "scratch").unwrap();

    let survivor = ws.close_focused().unwrap();
    assert_eq!(survivor, root);
    assert_eq!(ws.root(), root);
    assert_eq!(ws.focused(), root);
    let fresh = ws.focused_document().unwrap();
    assert_ne!(fresh, old);
    assert!(!ws.bindings().contains(old));
    assert_eq!(text_of(&ws, root), "Welcome");
    assert_eq!(ws.bindings().current(), Some(fresh));
    ws.check_invariants().unwrap();
}

// -- Error contract --

#[test]
fn splitting_unfocused_leaf_rejected_without_mutation() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(split).unwrap();
    let docs = ws.bindings().len();

    let err = ws.split(right, Direction::Horizontal).unwrap_err();
    assert_eq!(err, TilingError::unsupported("split", right));
    assert_eq!(ws.root(), split);
    assert_eq!(ws.leaf_count(), 2);
    assert_eq!(ws.bindings().len(), docs);
    ws.check_invariants().unwrap();
}

#[test]
fn split_request_on_split_node_targets_focused_leaf() {
    let mut ws = workspace(100, 100);
    let outer = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(outer).unwrap();

    let inner = ws.split(outer, Direction::Horizontal).unwrap();
    assert_eq!(ws.first_child(outer).unwrap(), inner);
    assert_eq!(ws.first_child(inner).unwrap(), left);
}

#[test]
fn child_access_on_leaf_is_unsupported() {
    let ws = workspace(100, 100);
    let root = ws.root();
    assert!(matches!(
        ws.first_child(root),
        Err(TilingError::UnsupportedOperation { operation: "first", .. })
    ));
    assert!(matches!(
        ws.second_child(root),
        Err(TilingError::UnsupportedOperation { operation: "second", .. })
    ));
}

#[test]
fn focusing_split_node_is_unsupported() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    assert_eq!(
        ws.set_focused(split),
        Err(TilingError::unsupported("set_focused", split))
    );
}

#[test]
fn negative_resize_rejected() {
    let mut ws = workspace(100, 100);
    assert!(matches!(
        ws.resize(-1, 10),
        Err(TilingError::Dimension { width: -1, .. })
    ));
    assert_eq!(ws.bounds(ws.root()).unwrap(), Rect::new(0, 0, 100, 100));
}

#[test]
fn stale_handle_is_unknown() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(split).unwrap();
    ws.close(right).unwrap();
    assert_eq!(ws.close(right), Err(TilingError::UnknownPane(right)));
    assert_eq!(ws.set_focused(right), Err(TilingError::UnknownPane(right)));
}

// -- Documents --

#[test]
fn split_duplicates_document_independently() {
    let mut ws = workspace(100, 100);
    let original = ws.root();
    let doc = ws.document_of(original).unwrap();
    ws.bindings_mut().edit(doc, "X").unwrap();
    ws.sync_documents();

    let split = ws.split_focused(Direction::Vertical).unwrap();
    let created = ws.second_child(split).unwrap();
    let copy = ws.document_of(created).unwrap();
    assert_ne!(copy, doc);
    assert_eq!(text_of(&ws, created), "X");

    ws.bindings_mut().edit(copy, "Y").unwrap();
    assert_eq!(text_of(&ws, original), "X");
    assert_eq!(text_of(&ws, created), "Y");
}

#[test]
fn close_releases_document() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(split).unwrap();
    let doc = ws.document_of(right).unwrap();
    ws.close(right).unwrap();
    assert!(!ws.bindings().contains(doc));
    assert_eq!(ws.bindings().len(), 1);
}

#[test]
fn focus_change_sets_current_document() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(split).unwrap();
    ws.set_focused(right).unwrap();
    assert_eq!(ws.bindings().current(), Some(ws.document_of(right).unwrap()));
}

#[test]
fn sync_rebuilds_changed_leaf() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(split).unwrap();
    let doc = ws.document_of(right).unwrap();
    ws.bindings_mut()
        .load(doc, ContentSpan::new("about:notes", "one\ntwo"))
        .unwrap();

    assert_eq!(ws.sync_documents(), vec![right]);
    let mut rec = Recorder::default();
    ws.render(&mut rec);
    assert!(rec.texts.iter().any(|(_, _, t)| t == "about:notes"));
    assert!(ws.sync_documents().is_empty());
}

#[test]
fn content_changed_for_unbound_document() {
    let mut ws = workspace(100, 100);
    assert_eq!(
        ws.content_changed(DocumentId(99)),
        Err(TilingError::UnknownDocument(DocumentId(99)))
    );
}

// -- Focus and input --

#[test]
fn click_focuses_exactly_one_leaf() {
    let mut ws = workspace(100, 100);
    ws.split_focused(Direction::Vertical).unwrap();
    ws.split_focused(Direction::Horizontal).unwrap();
    let layout = ws.compute_layout();
    assert_eq!(layout.len(), 3);

    for (pane, rect) in layout {
        let reply = ws.handle_mouse(&MouseEvent::pressed(rect.x + 10, rect.y + 10));
        ws.handle_mouse(&MouseEvent::released(rect.x + 10, rect.y + 10));
        assert!(reply.is_handled());
        assert_eq!(ws.focused(), pane);
        let focused: Vec<_> = ws.leaves().into_iter().filter(|&l| ws.has_focus(l)).collect();
        assert_eq!(focused, vec![pane]);
    }
    ws.check_invariants().unwrap();
}

#[test]
fn split_nodes_report_focus_of_descendant() {
    let mut ws = workspace(100, 100);
    let outer = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(outer).unwrap();
    let inner = ws.split_focused(Direction::Horizontal).unwrap();
    assert!(ws.has_focus(outer));
    assert!(ws.has_focus(inner));
    assert!(!ws.has_focus(right));
}

#[test]
fn select_split_keeps_focus_inside_or_picks_first_leaf() {
    let mut ws = workspace(100, 100);
    let outer = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(outer).unwrap();
    let right = ws.second_child(outer).unwrap();
    ws.set_focused(right).unwrap();
    let inner = ws.split_focused(Direction::Horizontal).unwrap();

    assert_eq!(ws.select(outer).unwrap(), right);
    ws.set_focused(left).unwrap();
    assert_eq!(ws.select(inner).unwrap(), right);
}

#[test]
fn focus_cycles_in_leaf_order() {
    let mut ws = workspace(100, 100);
    assert!(!ws.focus_next());
    ws.split_focused(Direction::Vertical).unwrap();
    ws.split_focused(Direction::Vertical).unwrap();
    let leaves = ws.leaves();
    assert_eq!(ws.focused(), leaves[0]);

    assert!(ws.focus_next());
    assert_eq!(ws.focused(), leaves[1]);
    assert!(ws.focus_prev());
    assert!(ws.focus_prev());
    assert_eq!(ws.focused(), leaves[2]);
}

#[test]
fn keys_go_to_focused_leaf() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(split).unwrap();
    ws.set_focused(right).unwrap();
    assert_eq!(ws.handle_key(&KeyEvent::plain("a")), ReturnMessage::Redraw);

    let mut rec = Recorder::default();
    ws.render(&mut rec);
    let right_x = ws.bounds(right).unwrap().x;
    assert!(rec
        .texts
        .iter()
        .any(|(x, _, t)| *x > right_x && t == "> a"));
}

#[test]
fn render_draws_separator_then_children_with_focus_border() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(split).unwrap();

    let mut rec = Recorder::default();
    ws.render(&mut rec);
    assert_eq!(rec.fills.len(), 1);
    assert_eq!(rec.fills[0].0, Rect::new(48, 0, 4, 100));
    assert_eq!(rec.strokes.len(), 1);
    assert_eq!(rec.strokes[0].0, ws.bounds(left).unwrap());
}

// -- Geometry propagation --

#[test]
fn offset_propagates_to_children() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(split).unwrap();
    ws.set_pane_offset(split, -10, 5).unwrap();
    assert_eq!(ws.viewport(right).unwrap().offset(), lattice_common::Point::new(-10, 5));
}

#[test]
fn reference_follows_child_position() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(split).unwrap();
    let vp = ws.viewport(right).unwrap();
    assert_eq!(vp.reference(), lattice_common::Point::new(50, 0));
    assert_eq!(vp.parent_extent(), (50, 100));
    assert!(vp.is_visible());
}

#[test]
fn parent_extent_never_shrinks_below_size() {
    let mut ws = workspace(100, 100);
    let root = ws.root();
    ws.set_pane_parent_extent(root, 40, 40).unwrap();
    assert_eq!(ws.viewport(root).unwrap().parent_extent(), (40, 40));
    ws.set_pane_size(root, 80, 30).unwrap();
    assert_eq!(ws.viewport(root).unwrap().parent_extent(), (80, 40));
}

#[test]
fn child_extent_is_derived_from_parent_share() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let left = ws.first_child(split).unwrap();
    let right = ws.second_child(split).unwrap();

    drag(&mut ws, (50, 50), (60, 50));
    assert_eq!(ws.viewport(left).unwrap().parent_extent(), (60, 100));
    assert_eq!(ws.viewport(right).unwrap().parent_extent(), (40, 100));

    // rebuilt on every layout pass, so a smaller share gives a smaller extent
    drag(&mut ws, (60, 50), (40, 50));
    assert_eq!(ws.viewport(left).unwrap().parent_extent(), (40, 100));
    assert_eq!(ws.viewport(right).unwrap().parent_extent(), (60, 100));

    // the split's own extent only grows
    ws.resize(50, 50).unwrap();
    assert_eq!(ws.viewport(split).unwrap().parent_extent(), (100, 100));
    assert_eq!(ws.viewport(left).unwrap().parent_extent(), (40, 100));
}

#[test]
fn position_change_moves_subtree() {
    let mut ws = workspace(100, 100);
    let split = ws.split_focused(Direction::Vertical).unwrap();
    let right = ws.second_child(split).unwrap();
    ws.set_pane_position(split, 10, 20).unwrap();
    assert_eq!(ws.bounds(right).unwrap(), Rect::new(60, 20, 50, 100));
    assert!(ws.set_pane_position(split, -1, 0).is_err());
}

// -- Commands and events --

#[test]
fn execute_dispatches_commands() {
    let mut ws = workspace(100, 100);
    assert!(ws.execute(TilingCommand::SplitVertical).unwrap());
    assert!(ws.execute(TilingCommand::SplitHorizontal).unwrap());
    assert_eq!(ws.leaf_count(), 3);
    assert!(ws.execute(TilingCommand::FocusNext).unwrap());
    assert!(ws.execute(TilingCommand::Close).unwrap());
    assert_eq!(ws.leaf_count(), 2);
    ws.check_invariants().unwrap();
}

#[test]
fn structural_changes_are_published() {
    let ws = workspace(100, 100);
    let mut ws = ws.with_event_bus(EventBus::new(16));
    let mut rx = ws.subscribe().unwrap();
    let original = ws.root();

    let split = ws.split_focused(Direction::Vertical).unwrap();
    let created = ws.second_child(split).unwrap();
    ws.set_focused(created).unwrap();
    ws.close(created).unwrap();

    assert_eq!(
        rx.try_recv().unwrap(),
        WorkspaceEvent::PaneSplit {
            split,
            original,
            created
        }
    );
    assert_eq!(rx.try_recv().unwrap(), WorkspaceEvent::PaneFocused(created));
    assert_eq!(rx.try_recv().unwrap(), WorkspaceEvent::PaneFocused(original));
    assert_eq!(
        rx.try_recv().unwrap(),
        WorkspaceEvent::PaneClosed {
            closed: created,
            survivor: original
        }
    );
}

#[test]
fn snapshot_serializes_tree() {
    let mut ws = workspace(100, 100);
    ws.split_focused(Direction::Vertical).unwrap();
    let json = serde_json::to_value(ws.snapshot().unwrap()).unwrap();
    assert_eq!(json["root"]["kind"], "split");
    assert_eq!(json["root"]["first"]["focused"], true);
    assert_eq!(json["root"]["second"]["focused"], false);
}

#[test]
fn random_sequence_keeps_invariants() {
    let mut ws = workspace(120, 90);
    let script = [
        TilingCommand::SplitVertical,
        TilingCommand::SplitHorizontal,
        TilingCommand::FocusNext,
        TilingCommand::SplitVertical,
        TilingCommand::FocusPrev,
        TilingCommand::Close,
        TilingCommand::SplitHorizontal,
        TilingCommand::Close,
        TilingCommand::Close,
        TilingCommand::Close,
        TilingCommand::Close,
    ];
    for command in script {
        ws.execute(command).unwrap();
        ws.check_invariants().unwrap();
        assert_eq!(ws.bindings().len(), ws.leaf_count());
    }
    assert_eq!(ws.leaf_count(), 1);
    assert_eq!(ws.bounds(ws.root()).unwrap(), Rect::new(0, 0, 120, 90));
}
