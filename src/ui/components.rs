/// Reusable UI components

use yew::prelude::*;

/// One category as shown in the popup
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub name: String,
    pub href: String,
    pub warning: bool,
}

#[derive(Properties, PartialEq)]
pub struct CategoryItemProps {
    pub row: CategoryRow,
}

#[function_component(CategoryItem)]
pub fn category_item(props: &CategoryItemProps) -> Html {
    let row = &props.row;

    html! {
        <li class={classes!(row.warning.then_some("warning"))}>
            <a href={row.href.clone()} target="_blank" rel="noopener noreferrer">
                {&row.name}
            </a>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryListProps {
    pub rows: Vec<CategoryRow>,
}

#[function_component(CategoryList)]
pub fn category_list(props: &CategoryListProps) -> Html {
    html! {
        <ul id="categories">
            {for props.rows.iter().map(|row| html! {
                <CategoryItem row={row.clone()} />
            })}
        </ul>
    }
}
