// Example: drive the scroll state machine with synthetic geometry.
use scrollsync::{
    BackToTop, ElementRect, NavLink, ScrollStateMachine, Section, StaticGeometry, SyncOptions,
    Viewport,
};

fn main() {
    let options = SyncOptions::default();
    let navbar = 1;
    let mut machine = ScrollStateMachine::new(&options, Some(navbar));
    let mut back_to_top = BackToTop::new(options.back_to_top_threshold);

    let mut geometry =
        StaticGeometry::new(Viewport::new(1280, 800)).with_element(navbar, ElementRect::new(0, 64));
    for (i, id) in ["home", "about", "work", "contact"].iter().enumerate() {
        let element = 10 + i as u64;
        machine.sections_mut().add_section(Section::new(*id, element));
        machine
            .sections_mut()
            .add_link(NavLink::new(20 + i as u64, *id));
        geometry.set_element(element, ElementRect::new(64 + 700 * i as u64, 700));
    }

    for offset in (0..2_400u64).step_by(300) {
        geometry.set_scroll_offset(offset);
        let p = machine.on_scroll(&geometry);
        let visible = back_to_top.update(offset);
        println!(
            "offset={offset:>5} elevated={} section={:?} back_to_top={visible}",
            p.elevated,
            machine.sections().current_id()
        );
    }
}
