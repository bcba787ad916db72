use super::tile::Tile;
use crate::game::Board as GameBoard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub board: GameBoard,
}

#[function_component(Board)]
pub fn board(props: &Props) -> Html {
    let Props { board } = props;
    let frame = board.rect();

    let tiles = board
        .tiles()
        .iter()
        .filter(|tile| tile.is_visible())
        .map(|tile| {
            let number = tile.number();
            html! {
                <Tile
                    key={number.get() as usize}
                    number={number.get()}
                    name={number.name()}
                    rect={tile.rect()}
                    sprite={tile.sprite()} />
            }
        });

    html! {
        <>
            <rect
                x={frame.x.to_string()}
                y={frame.y.to_string()}
                width={frame.width.to_string()}
                height={frame.height.to_string()}
                class="board" />
            {for tiles}
        </>
    }
}
