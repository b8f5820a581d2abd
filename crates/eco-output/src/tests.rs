//! Integration tests for eco-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use eco_calc::compute_options;
    use eco_session::SessionState;

    use crate::csv::CsvExporter;
    use crate::writer::ReportWriter;
    use crate::{export_session, HistoryRow, OutputError};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn files_created() {
        let dir = tmp();
        let _w = CsvExporter::new(dir.path()).unwrap();
        assert!(dir.path().join("options.csv").exists());
        assert!(dir.path().join("report.csv").exists());
        assert!(dir.path().join("points_history.csv").exists());
    }

    #[test]
    fn headers_correct() {
        let dir = tmp();
        let mut w = CsvExporter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir.path().join("options.csv")), ["mode", "cost", "co2_kg", "time_min"]);
        assert_eq!(headers(&dir.path().join("report.csv")), ["indicator", "value"]);
        assert_eq!(headers(&dir.path().join("points_history.csv")), ["trip", "points"]);
    }

    #[test]
    fn options_are_rounded() {
        let dir = tmp();
        let mut w = CsvExporter::new(dir.path()).unwrap();
        let opts = compute_options(10.0, 3, 1300.0).unwrap();
        let rows: Vec<_> = opts.iter().map(|o| o.row()).collect();
        w.write_options(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("options.csv")).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read.len(), 4);
        assert_eq!(&read[0][0], "Car");
        assert_eq!(&read[0][1], "1083");
        assert_eq!(&read[0][2], "1.92");
        assert_eq!(&read[1][0], "Bus");
        assert_eq!(&read[1][1], "800");
        assert_eq!(&read[3][1], "0");
    }

    #[test]
    fn history_rows() {
        let dir = tmp();
        let mut w = CsvExporter::new(dir.path()).unwrap();
        w.write_history(&[HistoryRow { trip: 1, points: 33 }, HistoryRow { trip: 2, points: 66 }])
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("points_history.csv")).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read.len(), 2);
        assert_eq!(&read[1][0], "2");
        assert_eq!(&read[1][1], "66");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvExporter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn full_session_export() {
        let dir = tmp();
        let opts = compute_options(10.0, 3, 1300.0).unwrap();
        let state = SessionState::new()
            .apply_trip(283.33, 1.03, 33)
            .apply_trip(283.33, 1.03, 33);

        let mut w = CsvExporter::new(dir.path()).unwrap();
        export_session(&mut w, &opts, &state).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("report.csv")).unwrap();
        let report: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(report.len(), 3);
        assert_eq!(&report[0][0], "Savings CLP");
        assert_eq!(&report[0][1], "567");
        assert_eq!(&report[2][0], "Ecopoints");
        assert_eq!(&report[2][1], "66");

        let mut rdr = csv::Reader::from_path(dir.path().join("points_history.csv")).unwrap();
        assert_eq!(rdr.records().count(), 2);
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tmp();
        let nested = dir.path().join("exports/today");
        let mut w = CsvExporter::new(&nested).unwrap();
        w.finish().unwrap();
        assert!(nested.join("options.csv").exists());
    }

    #[test]
    fn directory_under_a_file_is_io_error() {
        let dir = tmp();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = CsvExporter::new(&blocker.join("out"));
        assert!(matches!(result, Err(OutputError::Io(_))));
    }
}
