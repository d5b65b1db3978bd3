use agenda::carousel::Carousel;
use agenda::event_list::{EventList, EventListView};
use agenda::model::{DataSnapshot, DataState};
use agenda::source::DataSource;
use std::path::Path;

#[tokio::test]
async fn demo_document_drives_both_components() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/events.json");
    let source = DataSource::new();
    source.load_file(&path).await;
    let data = source.current();

    let mut list = EventList::new();
    list.sync(&data);
    let EventListView::Ready(page) = list.derive(&data) else {
        panic!("demo document should load");
    };
    let titles: Vec<&str> = page.cards.iter().map(|c| c.event.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "#DigitonPARIS",
            "Conférence &co-responsable",
            "User&product MixUsers",
            "Sneakercraze market",
        ]
    );
    assert_eq!(
        page.available_types,
        vec!["conférence", "expérience digitale", "soirée entreprise"]
    );
    assert_eq!(page.page_count(), 1);

    list.select_type(Some("conférence".to_string()));
    let EventListView::Ready(page) = list.derive(&data) else {
        panic!("still ready");
    };
    assert_eq!(page.cards.len(), 2);

    let mut carousel = Carousel::new();
    carousel.sync(&data);
    let view = carousel.derive(&data);
    assert_eq!(view.slides.len(), 3);
    assert_eq!(view.active_slide().unwrap().event.title, "World economic forum");
    assert_eq!(view.active_slide().unwrap().month, "mars");
}

#[test]
fn bad_featured_dates_leave_the_page_ready() {
    let raw = r#"{
        "events": [
            {"id": 1, "title": "Soirée", "date": "2024-01-10T19:00:00Z", "type": "Talk"}
        ],
        "focus": [
            {"title": "Leap", "date": "2022-02-29T20:28:45.744Z"},
            {"title": "Garbage", "date": "n/a"}
        ]
    }"#;
    let data = DataState::ready(DataSnapshot::from_json_str(raw).unwrap());

    let mut list = EventList::new();
    list.sync(&data);
    let EventListView::Ready(page) = list.derive(&data) else {
        panic!("valid events must still render");
    };
    assert_eq!(page.cards.len(), 1);
    assert_eq!(page.cards[0].event.title, "Soirée");

    let mut carousel = Carousel::new();
    carousel.sync(&data);
    let view = carousel.derive(&data);
    assert_eq!(view.slides.len(), 1);
    assert_eq!(view.active_slide().unwrap().event.title, "Leap");
}
