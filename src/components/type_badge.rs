use yew::prelude::*;

use crate::models::property::PropertyType;

#[derive(Properties, PartialEq)]
pub struct TypeBadgeProps {
    pub kind: PropertyType,
}

/// Colored pill naming the property type.
#[function_component(TypeBadge)]
pub fn type_badge(props: &TypeBadgeProps) -> Html {
    html! {
        <span class={format!("type-badge {}", props.kind.code())}>
            {props.kind.label()}
        </span>
    }
}
