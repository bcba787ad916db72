use super::button::Button;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view_width: i32,
    pub view_height: i32,
    pub width: f64,
    pub height: f64,
    pub onstart: Callback<()>,
}

#[function_component(Menu)]
pub fn menu(props: &Props) -> Html {
    let Props {
        view_width,
        view_height,
        width,
        height,
        onstart,
    } = props;
    let center_x = *view_width as f64 / 2.;
    let height_unit = *view_height as f64 / 12.;

    let onstart = onstart.clone();
    let onclick = Callback::from(move |event: web_sys::MouseEvent| {
        event.prevent_default();
        onstart.emit(());
    });

    html! {
        <svg
            width={width.to_string()}
            height={height.to_string()}
            viewBox={format!("0 0 {} {}", view_width, view_height)}
            class="screen">
            <text
                x={center_x.to_string()}
                y={(height_unit * 3.).to_string()}
                font-size={format!("{}px", height_unit * 1.2)}
                text-anchor="middle"
                class="title">
                {"NUMBER TILES"}
            </text>
            <text
                x={center_x.to_string()}
                y={(height_unit * 4.5).to_string()}
                font-size={format!("{}px", height_unit * 0.45)}
                text-anchor="middle"
                class="text">
                {"Find the hidden number in as few guesses as you can"}
            </text>
            <Button x={center_x} y={height_unit * 7.} font_size={height_unit} onclick={onclick}>
                {"PLAY"}
            </Button>
            <text
                x={center_x.to_string()}
                y={(height_unit * 10.).to_string()}
                font-size={format!("{}px", height_unit * 0.4)}
                text-anchor="middle"
                class="text">
                {"Press Enter to start, Escape to come back here"}
            </text>
        </svg>
    }
}
