use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    /// Space between the label and the frame, in font-size units.
    #[prop_or(0.4)]
    pub padding: f64,
    #[prop_or_default]
    pub children: Children,
    pub onclick: Callback<web_sys::MouseEvent>,
}

/// Frame `(x, y, width, height)` around a label's bounding box, leaving
/// `gap` on the sides and half of it above and below.
fn frame_around(x: f32, y: f32, width: f32, height: f32, gap: f32) -> (f32, f32, f32, f32) {
    (x - gap, y - gap / 2., width + gap * 2., height + gap)
}

/// A text label framed by a rectangle fitted to the rendered text.
#[function_component(Button)]
pub fn button(props: &Props) -> Html {
    let Props {
        x,
        y,
        font_size,
        padding,
        children,
        onclick,
    } = props;

    let frame = use_state(|| html! {<></>});
    let text_ref = use_node_ref();

    let cloned_frame = frame.clone();
    // SvgRect measures in f32.
    let gap = (font_size * padding) as f32;
    use_effect_with_deps(
        move |text_ref| {
            let bbox = text_ref
                .cast::<web_sys::SvgGraphicsElement>()
                .map(|text| text.get_b_box());
            match bbox {
                Some(Ok(rect)) => {
                    let (x, y, width, height) =
                        frame_around(rect.x(), rect.y(), rect.width(), rect.height(), gap);
                    cloned_frame.set(html! {
                        <rect
                            x={x.to_string()}
                            y={y.to_string()}
                            width={width.to_string()}
                            height={height.to_string()}
                            class="button-frame" />
                    })
                }
                Some(Err(_)) => log::warn!("cannot measure button label"),
                None => {}
            }
            || ()
        },
        text_ref.clone(),
    );

    html! {
        <g class="button" onclick={onclick}>
            {(*frame).clone()}
            <text
                x={x.to_string()}
                y={y.to_string()}
                font-size={format!("{}px", font_size)}
                dominant-baseline="middle"
                text-anchor="middle"
                ref={text_ref}>
                {for children.iter()}
            </text>
        </g>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_frame_around() {
        assert_eq!(
            frame_around(100., 50., 80., 40., 16.),
            (84., 42., 112., 56.)
        );
    }
}
