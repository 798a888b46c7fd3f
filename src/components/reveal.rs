use yew::prelude::*;

use crate::hooks::use_in_viewport;

/// Where revealed content slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Right,
}

impl Direction {
    fn class(self) -> &'static str {
        match self {
            Direction::Up => "from-below",
            Direction::Left => "from-left",
            Direction::Right => "from-right",
        }
    }

    /// Alternating cards: even ones come from the left.
    pub fn alternate(index: usize) -> Self {
        if index % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

pub fn reveal_classes(direction: Direction, visible: bool) -> Classes {
    classes!("reveal", direction.class(), visible.then(|| "revealed"))
}

/// Stagger delay for the `index`th item of a list.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_viewport(node.clone(), true);

    html! {
        <div
            ref={node}
            class={classes!(reveal_classes(props.direction, visible), props.class.clone())}
            style={format!("transition-delay: {}ms", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_seen() {
        let hidden = reveal_classes(Direction::Up, false);
        assert!(hidden.contains("reveal") && hidden.contains("from-below"));
        assert!(!hidden.contains("revealed"));
        let shown = reveal_classes(Direction::Left, true);
        assert!(shown.contains("from-left") && shown.contains("revealed"));
    }

    #[test]
    fn cards_alternate_sides() {
        assert_eq!(Direction::alternate(0), Direction::Left);
        assert_eq!(Direction::alternate(1), Direction::Right);
        assert_eq!(Direction::alternate(4), Direction::Left);
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger(0, 100), 0);
        assert_eq!(stagger(3, 100), 300);
        assert_eq!(stagger(2, 200), 400);
    }
}
