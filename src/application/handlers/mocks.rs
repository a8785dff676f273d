//! In-memory port implementations shared by the handler tests.
//!
//! The workshop mock resolves instructor names and enrolled students
//! through the participant mock, the way the SQL joins do.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::attendance::{AttendanceStats, AttendanceStatus};
use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, Timestamp, WorkshopId};
use crate::domain::participant::{NewParticipant, Participant, ParticipantStatus, ParticipantType};
use crate::domain::workshop::{Enrollment, NewWorkshop, Workshop, WorkshopRef, WorkshopStatus};
use crate::ports::{
    AttendanceHistoryEntry, AttendanceReader, ParticipantRepository, WorkshopAttendanceView,
    WorkshopRepository, WriteAck,
};

fn simulated_failure() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, "Simulated write failure")
}

/// A stored participant with predictable contact fields.
pub fn participant(id: i64, name: &str, kind: ParticipantType) -> Participant {
    Participant {
        id: ParticipantId::new(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "41999999999".to_string(),
        participant_type: kind,
        ra: None,
        cpf: format!("{:011}", id),
        status: ParticipantStatus::Active,
        created_at: Timestamp::now(),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Participants
// ════════════════════════════════════════════════════════════════════════════════

pub struct MockParticipantRepository {
    participants: Mutex<Vec<Participant>>,
    fail_writes: bool,
}

impl MockParticipantRepository {
    pub fn new() -> Self {
        Self::with_participants(Vec::new())
    }

    pub fn with_participants(participants: Vec<Participant>) -> Self {
        Self {
            participants: Mutex::new(participants),
            fail_writes: false,
        }
    }

    pub fn failing_writes(participants: Vec<Participant>) -> Self {
        Self {
            participants: Mutex::new(participants),
            fail_writes: true,
        }
    }

    pub fn get(&self, id: ParticipantId) -> Option<Participant> {
        self.participants
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.participants.lock().unwrap().len()
    }
}

#[async_trait]
impl ParticipantRepository for MockParticipantRepository {
    async fn create(&self, new: &NewParticipant) -> Result<Participant, DomainError> {
        if self.fail_writes {
            return Err(simulated_failure());
        }
        let mut participants = self.participants.lock().unwrap();
        let stored = Participant {
            id: ParticipantId::new(participants.len() as i64 + 1),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            participant_type: new.participant_type,
            ra: new.ra.clone(),
            cpf: new.cpf.clone(),
            status: ParticipantStatus::Active,
            created_at: Timestamp::now(),
        };
        participants.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ParticipantId) -> Result<Option<Participant>, DomainError> {
        Ok(self.get(id))
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<ParticipantId>, DomainError> {
        let participants = self.participants.lock().unwrap();
        Ok(participants.iter().find(|p| p.cpf == cpf).map(|p| p.id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<ParticipantId>, DomainError> {
        let participants = self.participants.lock().unwrap();
        Ok(participants.iter().find(|p| p.email == email).map(|p| p.id))
    }

    async fn list_active(
        &self,
        participant_type: Option<ParticipantType>,
    ) -> Result<Vec<Participant>, DomainError> {
        let participants = self.participants.lock().unwrap();
        Ok(participants
            .iter()
            .filter(|p| p.status.is_active())
            .filter(|p| participant_type.map_or(true, |t| p.participant_type == t))
            .cloned()
            .collect())
    }

    async fn update(&self, participant: &Participant) -> Result<WriteAck, DomainError> {
        if self.fail_writes {
            return Err(simulated_failure());
        }
        let mut participants = self.participants.lock().unwrap();
        match participants.iter_mut().find(|p| p.id == participant.id) {
            Some(stored) => {
                *stored = participant.clone();
                Ok(WriteAck::new(0, 1))
            }
            None => Ok(WriteAck::new(0, 0)),
        }
    }

    async fn set_status(
        &self,
        id: ParticipantId,
        status: ParticipantStatus,
    ) -> Result<WriteAck, DomainError> {
        if self.fail_writes {
            return Err(simulated_failure());
        }
        let mut participants = self.participants.lock().unwrap();
        match participants.iter_mut().find(|p| p.id == id) {
            Some(stored) => {
                stored.status = status;
                Ok(WriteAck::new(0, 1))
            }
            None => Ok(WriteAck::new(0, 0)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Workshops
// ════════════════════════════════════════════════════════════════════════════════

pub struct MockWorkshopRepository {
    participants: Arc<MockParticipantRepository>,
    workshops: Mutex<Vec<Workshop>>,
    enrollments: Mutex<Vec<Enrollment>>,
    fail_writes: bool,
}

impl MockWorkshopRepository {
    pub fn new(participants: Arc<MockParticipantRepository>) -> Self {
        Self {
            participants,
            workshops: Mutex::new(Vec::new()),
            enrollments: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn failing_writes(participants: Arc<MockParticipantRepository>) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(participants)
        }
    }

    /// Stores a workshop directly, bypassing the handlers.
    pub fn seed(&self, name: &str, instructor_id: ParticipantId, status: WorkshopStatus) -> WorkshopId {
        let mut workshops = self.workshops.lock().unwrap();
        let id = WorkshopId::new(workshops.len() as i64 + 1);
        workshops.push(Workshop {
            id,
            name: name.to_string(),
            instructor_id,
            instructor_name: String::new(),
            schedule: None,
            status,
            start_date: None,
            end_date: None,
            created_at: Timestamp::now(),
        });
        id
    }

    pub fn get(&self, id: WorkshopId) -> Option<Workshop> {
        let workshop = self
            .workshops
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .cloned()?;
        Some(self.with_instructor_name(workshop))
    }

    pub fn enrollment_count(&self) -> usize {
        self.enrollments.lock().unwrap().len()
    }

    fn with_instructor_name(&self, mut workshop: Workshop) -> Workshop {
        workshop.instructor_name = self
            .participants
            .get(workshop.instructor_id)
            .map(|p| p.name)
            .unwrap_or_default();
        workshop
    }
}

#[async_trait]
impl WorkshopRepository for MockWorkshopRepository {
    async fn create(&self, new: &NewWorkshop) -> Result<WorkshopId, DomainError> {
        if self.fail_writes {
            return Err(simulated_failure());
        }
        let mut workshops = self.workshops.lock().unwrap();
        let id = WorkshopId::new(workshops.len() as i64 + 1);
        workshops.push(Workshop {
            id,
            name: new.name.clone(),
            instructor_id: new.instructor_id,
            instructor_name: String::new(),
            schedule: new.schedule.clone(),
            status: new.status,
            start_date: new.start_date,
            end_date: new.end_date,
            created_at: Timestamp::now(),
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: WorkshopId) -> Result<Option<Workshop>, DomainError> {
        Ok(self.get(id))
    }

    async fn list(&self, status: Option<WorkshopStatus>) -> Result<Vec<Workshop>, DomainError> {
        let workshops: Vec<Workshop> = self
            .workshops
            .lock()
            .unwrap()
            .iter()
            .filter(|w| status.map_or(true, |s| w.status == s))
            .cloned()
            .collect();
        Ok(workshops
            .into_iter()
            .map(|w| self.with_instructor_name(w))
            .collect())
    }

    async fn update(&self, workshop: &Workshop) -> Result<WriteAck, DomainError> {
        if self.fail_writes {
            return Err(simulated_failure());
        }
        let mut workshops = self.workshops.lock().unwrap();
        match workshops.iter_mut().find(|w| w.id == workshop.id) {
            Some(stored) => {
                *stored = workshop.clone();
                Ok(WriteAck::new(0, 1))
            }
            None => Ok(WriteAck::new(0, 0)),
        }
    }

    async fn set_status(&self, id: WorkshopId, status: WorkshopStatus) -> Result<WriteAck, DomainError> {
        if self.fail_writes {
            return Err(simulated_failure());
        }
        let mut workshops = self.workshops.lock().unwrap();
        match workshops.iter_mut().find(|w| w.id == id) {
            Some(stored) => {
                stored.status = status;
                Ok(WriteAck::new(0, 1))
            }
            None => Ok(WriteAck::new(0, 0)),
        }
    }

    async fn find_by_instructor(
        &self,
        instructor_id: ParticipantId,
    ) -> Result<Vec<WorkshopRef>, DomainError> {
        let workshops = self.workshops.lock().unwrap();
        Ok(workshops
            .iter()
            .filter(|w| w.instructor_id == instructor_id)
            .map(Workshop::to_ref)
            .collect())
    }

    async fn list_participants(&self, id: WorkshopId) -> Result<Vec<Participant>, DomainError> {
        let enrolled: Vec<ParticipantId> = self
            .enrollments
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.workshop_id == id)
            .map(|e| e.participant_id)
            .collect();
        Ok(enrolled
            .into_iter()
            .filter_map(|p| self.participants.get(p))
            .collect())
    }

    async fn find_enrollment(
        &self,
        workshop_id: WorkshopId,
        participant_id: ParticipantId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let enrollments = self.enrollments.lock().unwrap();
        Ok(enrollments
            .iter()
            .find(|e| e.workshop_id == workshop_id && e.participant_id == participant_id)
            .cloned())
    }

    async fn enroll(&self, enrollment: &Enrollment) -> Result<WriteAck, DomainError> {
        if self.fail_writes {
            return Err(simulated_failure());
        }
        let mut enrollments = self.enrollments.lock().unwrap();
        if enrollments.iter().any(|e| {
            e.workshop_id == enrollment.workshop_id && e.participant_id == enrollment.participant_id
        }) {
            return Err(DomainError::new(
                ErrorCode::AlreadyEnrolled,
                "UNIQUE constraint failed: workshop_participants",
            ));
        }
        enrollments.push(enrollment.clone());
        Ok(WriteAck::new(enrollments.len() as i64, 1))
    }

    async fn unenroll(
        &self,
        workshop_id: WorkshopId,
        participant_id: ParticipantId,
    ) -> Result<WriteAck, DomainError> {
        if self.fail_writes {
            return Err(simulated_failure());
        }
        let mut enrollments = self.enrollments.lock().unwrap();
        let before = enrollments.len();
        enrollments.retain(|e| !(e.workshop_id == workshop_id && e.participant_id == participant_id));
        Ok(WriteAck::new(0, (before - enrollments.len()) as u64))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Attendance reads
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockAttendanceReader {
    views: Vec<WorkshopAttendanceView>,
    fail_reads: bool,
}

impl MockAttendanceReader {
    pub fn with_views(views: Vec<WorkshopAttendanceView>) -> Self {
        Self {
            views,
            fail_reads: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            views: Vec::new(),
            fail_reads: true,
        }
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail_reads {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl AttendanceReader for MockAttendanceReader {
    async fn list_for_workshop(
        &self,
        workshop_id: WorkshopId,
        date: Option<NaiveDate>,
    ) -> Result<Vec<WorkshopAttendanceView>, DomainError> {
        self.check()?;
        Ok(self
            .views
            .iter()
            .filter(|v| v.record.workshop_id == workshop_id)
            .filter(|v| date.map_or(true, |d| v.record.date == d))
            .cloned()
            .collect())
    }

    async fn stats_for_participant(
        &self,
        participant_id: ParticipantId,
    ) -> Result<AttendanceStats, DomainError> {
        self.check()?;
        let records: Vec<_> = self
            .views
            .iter()
            .filter(|v| v.record.participant_id == participant_id)
            .map(|v| v.record.status)
            .collect();
        let count = |status: AttendanceStatus| records.iter().filter(|s| **s == status).count() as u64;
        Ok(AttendanceStats::from_counts(
            records.len() as u64,
            count(AttendanceStatus::Present),
            count(AttendanceStatus::Absent),
        ))
    }

    async fn history_for_participant(
        &self,
        participant_id: ParticipantId,
    ) -> Result<Vec<AttendanceHistoryEntry>, DomainError> {
        self.check()?;
        Ok(self
            .views
            .iter()
            .filter(|v| v.record.participant_id == participant_id)
            .map(|v| AttendanceHistoryEntry {
                id: v.record.id,
                workshop_name: String::new(),
                date: v.record.date,
                status: v.record.status,
                notes: v.record.notes.clone(),
            })
            .collect())
    }
}
