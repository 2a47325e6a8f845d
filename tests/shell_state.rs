use std::cell::Cell;

use dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use portfolio_shell::components::layout::ShellView;
use portfolio_shell::hooks::{use_shell_state, ShellState};
use portfolio_shell::state::NavState;
use portfolio_shell::types::{Section, NAVIGATION};

thread_local! {
    static HANDLE: Cell<Option<ShellState>> = const { Cell::new(None) };
}

fn shell_harness(initial: NavState) -> Element {
    let shell = use_shell_state(initial);
    HANDLE.with(|handle| handle.set(Some(shell)));

    rsx! {
        ShellView { title: "Test Shell", shell: shell }
    }
}

/// A mounted shell whose state is driven through the hook, the same way the
/// click handlers drive it.
struct MountedShell {
    dom: VirtualDom,
}

impl MountedShell {
    fn new(initial: NavState) -> Self {
        let mut dom = VirtualDom::new_with_props(shell_harness, initial);
        dom.rebuild_in_place();
        Self { dom }
    }

    fn act(&mut self, f: impl FnOnce(&mut ShellState)) {
        let mut shell = HANDLE.with(|handle| handle.get()).expect("shell not mounted");
        self.dom.in_runtime(|| f(&mut shell));
        self.dom.render_immediate(&mut NoOpMutations);
    }

    fn state(&self) -> NavState {
        let shell = HANDLE.with(|handle| handle.get()).expect("shell not mounted");
        self.dom.in_runtime(|| shell.snapshot())
    }

    fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Toggle,
    Close,
    Select(Section),
}

fn scripted_harness(steps: Vec<Step>) -> Element {
    let shell = use_shell_state(NavState::default());
    let trace = use_hook(|| {
        let mut shell = shell;
        let mut seen = vec![shell.snapshot()];
        for step in &steps {
            match *step {
                Step::Toggle => shell.toggle_menu(),
                Step::Close => shell.close_menu(),
                Step::Select(section) => shell.select_section(section),
            }
            seen.push(shell.snapshot());
        }
        seen.iter()
            .map(|state| format!("{}:{}", state.active_section, state.menu_open))
            .collect::<Vec<_>>()
            .join("|")
    });

    rsx! {
        pre { id: "trace", "{trace}" }
    }
}

fn run_script(steps: Vec<Step>) -> String {
    let mut dom = VirtualDom::new_with_props(scripted_harness, steps);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn hook_transitions_follow_each_call() {
    let html = run_script(vec![
        Step::Toggle,
        Step::Select(Section::Green),
        Step::Toggle,
        Step::Close,
    ]);

    assert!(html.contains("portfolio:false|portfolio:true|green:false|green:true|green:false"));
}

#[test]
fn hook_close_on_closed_menu_is_a_no_op() {
    let html = run_script(vec![Step::Select(Section::Utilities), Step::Close]);

    assert!(html.contains("portfolio:false|utilities:false|utilities:false"));
}

#[test]
fn mounted_shell_starts_from_initial_state() {
    let shell = MountedShell::new(NavState::default());

    assert_eq!(shell.state(), NavState::default());
    let html = shell.html();
    assert!(html.contains("Welcome to My Portfolio"));
    assert!(!html.contains("shell-overlay"));
}

#[test]
fn toggle_through_hook_rerenders_overlay_and_glyph() {
    let mut shell = MountedShell::new(NavState::default());

    shell.act(|s| s.toggle_menu());
    assert_eq!(shell.state(), NavState::new(Section::Portfolio, true));
    let html = shell.html();
    assert!(html.contains("shell-overlay"));
    assert!(html.contains("data-icon=\"close\""));

    shell.act(|s| s.toggle_menu());
    assert_eq!(shell.state(), NavState::default());
    let html = shell.html();
    assert!(!html.contains("shell-overlay"));
    assert!(html.contains("data-icon=\"menu\""));
}

#[test]
fn selecting_each_entry_through_hook_closes_menu_and_swaps_panel() {
    for entry in NAVIGATION {
        let mut shell = MountedShell::new(NavState::default());
        shell.act(|s| s.toggle_menu());

        shell.act(|s| s.select_section(entry.id));

        assert_eq!(shell.state(), NavState::new(entry.id, false));
        let html = shell.html();
        assert!(html.contains(entry.id.panel().title));
        assert!(html.contains(&format!("id=\"panel-{}\"", entry.id)));
        assert!(!html.contains("shell-overlay"));
    }
}

#[test]
fn dismissing_through_hook_keeps_active_section() {
    let mut shell = MountedShell::new(NavState::new(Section::Finance, true));
    assert!(shell.html().contains("shell-overlay"));

    shell.act(|s| s.close_menu());

    assert_eq!(shell.state(), NavState::new(Section::Finance, false));
    let html = shell.html();
    assert!(!html.contains("shell-overlay"));
    assert!(html.contains("Financial Tools"));
}

#[test]
fn open_then_pick_green_living_through_hook() {
    let mut shell = MountedShell::new(NavState::default());

    shell.act(|s| s.toggle_menu());
    let html = shell.html();
    assert!(html.contains("shell-overlay"));
    assert!(html.contains("Welcome to My Portfolio"));

    shell.act(|s| s.select_section(Section::Green));
    assert_eq!(shell.state(), NavState::new(Section::Green, false));
    let html = shell.html();
    assert!(!html.contains("shell-overlay"));
    assert!(html.contains("Green Living Tools"));
    assert!(html.contains("Track and improve your environmental impact with these tools."));
}
