use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

const MAX_VIDEO_SIZE: usize = 100 * 1024 * 1024;

#[derive(Properties, PartialEq)]
pub struct VideoUploadProps {
    /// Emits (file name, bytes) once the file has been read.
    pub on_file: Callback<(String, Vec<u8>)>,
    #[prop_or_default]
    pub is_uploading: bool,
}

#[function_component]
pub fn VideoUpload(props: &VideoUploadProps) -> Html {
    let error_message = use_state(|| None::<String>);

    let onchange = {
        let on_file = props.on_file.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = match input.files() {
                Some(files) => files,
                None => return,
            };
            let file = match files.get(0) {
                Some(f) => f,
                None => return,
            };

            let file_size = file.size() as usize;
            if file_size > MAX_VIDEO_SIZE {
                error_message.set(Some(format!(
                    "File is too large ({:.1}MB). Maximum size is 100MB.",
                    file_size as f64 / 1_048_576.0
                )));
                return;
            }

            let file_name = file.name();
            let reader = FileReader::new().unwrap();
            let reader_clone = reader.clone();
            let on_file = on_file.clone();
            let error_message = error_message.clone();

            let onload = Closure::wrap(Box::new(move |_: Event| {
                let result = reader_clone.result().unwrap();
                let array = js_sys::Uint8Array::new(&result);
                let bytes: Vec<u8> = array.to_vec();

                error_message.set(None);
                on_file.emit((file_name.clone(), bytes));
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            reader.read_as_array_buffer(&file).unwrap();
            onload.forget();
        })
    };

    html! {
        <div class="space-y-2">
            <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">
                {"Upload recording"}
            </label>
            <input
                type="file"
                accept="video/mp4,video/avi,video/quicktime"
                {onchange}
                disabled={props.is_uploading}
                class="block text-sm text-neutral-600 dark:text-neutral-400"
            />
            if props.is_uploading {
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Uploading..."}
                </p>
            }
            if let Some(error) = &*error_message {
                <p class="text-sm text-red-700 dark:text-red-400">
                    {error.clone()}
                </p>
            }
        </div>
    }
}
