use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::market::Crop;

#[derive(Properties, PartialEq)]
pub struct CropSelectorProps {
    pub crop: Crop,
    pub on_change: Callback<Crop>,
}

/// Crop selector dropdown component
#[function_component(CropSelector)]
pub fn crop_selector(props: &CropSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(crop) = target.value().parse::<Crop>() {
                callback.emit(crop);
            }
        })
    };

    html! {
        <div class="crop-selector">
            <select
                class="crop-select"
                onchange={on_change}
                aria-label="Select crop"
                title="Select crop"
            >
                {
                    Crop::all().iter().map(|c| {
                        let selected = *c == props.crop;
                        html! {
                            <option value={c.value()} {selected}>{c.to_string()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}
