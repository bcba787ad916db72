use crate::game::{Rect, Sprite};
use yew::prelude::*;

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub number: u8,
    pub name: &'static str,
    pub rect: Rect,
    pub sprite: Sprite,
}

fn sprite_class(sprite: Sprite) -> &'static str {
    match sprite {
        Sprite::Normal => "tile-normal",
        Sprite::Highlighted => "tile-highlighted",
        Sprite::BlinkOff => "tile-blink-off",
        Sprite::BlinkOn => "tile-blink-on",
    }
}

#[function_component(Tile)]
pub fn tile(props: &Props) -> Html {
    let Props {
        number,
        name,
        rect,
        sprite,
    } = props.clone();
    let size = rect.width as f64;
    let center = rect.center();
    let font_size = format!("{}px", size * 0.6);

    html! {
        <g class={classes!("tile", sprite_class(sprite))} aria-label={name}>
            <rect
                x={rect.x.to_string()}
                y={rect.y.to_string()}
                width={rect.width.to_string()}
                height={rect.height.to_string()}
                rx={(size / 12.).to_string()} />
            <text
                x={center.x.to_string()}
                y={center.y.to_string()}
                font-size={font_size}
                dominant-baseline="central"
                text-anchor="middle">
                {number.to_string()}
            </text>
        </g>
    }
}
