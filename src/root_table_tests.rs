use super::*;

#[test]
fn test_new_table_has_one_default_range() {
    let table = RootTable::default();
    assert_eq!(table.name(), "Table");
    assert_eq!(table.range_count(), 1);
    assert_eq!(table.ranges()[0], DescriptorRange::new());
}

#[test]
fn test_empty_name_falls_back_to_default() {
    let table = RootTable::new("");
    assert_eq!(table.name(), DEFAULT_TABLE_NAME);
}

#[test]
fn test_range_count_follows_add_range() {
    let mut table = RootTable::default();
    for expected in 1..6 {
        assert_eq!(table.add_range(), expected);
    }
    assert_eq!(table.range_count(), 6);
    assert_eq!(table.get().NumDescriptorRanges, 6);
}

#[test]
fn test_get_aliases_range_storage() {
    let mut table = RootTable::default();
    table.add_range();
    table
        .update_range(1, |range| range.set_descriptor_count(4))
        .unwrap();

    let d3d12_table = table.get();
    let ranges = unsafe {
        std::slice::from_raw_parts(
            d3d12_table.pDescriptorRanges,
            d3d12_table.NumDescriptorRanges as usize,
        )
    };
    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[1].NumDescriptors, 4);
    assert_eq!(
        d3d12_table.pDescriptorRanges,
        table.ranges().as_ptr() as *const D3D12_DESCRIPTOR_RANGE
    );
}

#[test]
fn test_first_range_offset_stays_append() {
    let mut table = RootTable::default();
    table.add_range();

    table.update_range(0, |range| range.set_offset(12)).unwrap();
    table.update_range(1, |range| range.set_offset(12)).unwrap();

    assert_eq!(table.ranges()[0].offset(), OFFSET_APPEND);
    assert_eq!(table.ranges()[1].offset(), 12);
}

#[test]
fn test_update_missing_range_fails() {
    let mut table = RootTable::default();
    assert!(table.update_range(3, |_| ()).is_err());
}

#[test]
fn test_rename_rejects_empty_name() {
    let mut table = RootTable::default();
    assert!(!table.rename(""));
    assert_eq!(table.name(), "Table");
    assert!(table.rename("Ranges"));
    assert_eq!(table.name(), "Ranges");
}

#[test]
fn test_rename_buffer_waits_for_focus_loss() {
    let mut table = RootTable::default();
    let mut buffer = RenameBuffer::new(&table);

    *buffer.text_mut() = "Ran".to_owned();
    assert!(!buffer.sync(&mut table, RenameFocus::Editing));
    assert_eq!(table.name(), "Table");

    *buffer.text_mut() = "Ranges".to_owned();
    assert!(!buffer.sync(&mut table, RenameFocus::Editing));
    assert!(buffer.sync(&mut table, RenameFocus::LostFocus));
    assert_eq!(table.name(), "Ranges");
}

#[test]
fn test_rename_buffer_reverts_empty_text() {
    let mut table = RootTable::default();
    let mut buffer = RenameBuffer::new(&table);

    buffer.text_mut().clear();
    assert!(!buffer.sync(&mut table, RenameFocus::Editing));
    assert_eq!(buffer.text(), "");

    assert!(!buffer.sync(&mut table, RenameFocus::LostFocus));
    assert_eq!(table.name(), "Table");
    assert_eq!(buffer.text(), "Table");
}

#[test]
fn test_idle_rename_buffer_follows_table_name() {
    let mut table = RootTable::default();
    let mut buffer = RenameBuffer::new(&table);

    assert!(table.rename("Ranges"));
    assert!(!buffer.sync(&mut table, RenameFocus::Idle));
    assert_eq!(table.name(), "Ranges");
    assert_eq!(buffer.text(), "Ranges");

    assert!(!buffer.sync(&mut table, RenameFocus::LostFocus));
    assert_eq!(table.name(), "Ranges");
}
